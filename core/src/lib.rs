pub mod calendar;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod statement;
pub mod store;

#[cfg(test)]
mod store_test;

pub use calendar::{business_days, DateSelection};
pub use error::CompensationError;
pub use format::{format_brl, parse_amount};
pub use input::{parse_amount_field, parse_benefit_input, BenefitInput};
pub use model::benefit::{Cadence, OtherBenefit, ToggledBenefit};
pub use model::config::{AmountField, AppConfig, MAX_AMOUNT};
pub use model::settings::Settings;
pub use repository::{FileSettingsRepository, SettingsRepository};
pub use service::aggregator::{aggregate, line_items};
pub use service::dto::{Category, CompensationSummary, LineItem};
pub use statement::Statement;
pub use store::{AddBenefitOutcome, ConfigurationStore, RejectReason};
