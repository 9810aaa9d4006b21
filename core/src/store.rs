use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calendar::DateSelection;
use crate::error::CompensationError;
use crate::format::parse_amount;
use crate::model::benefit::OtherBenefit;
use crate::model::config::{is_valid_amount, AmountField, AppConfig};
use crate::service::aggregator::aggregate;
use crate::service::dto::CompensationSummary;
use crate::statement::Statement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyName,
    InvalidValue(String),
    NegativeValue,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::EmptyName => write!(f, "benefit name is empty"),
            RejectReason::InvalidValue(v) => write!(f, "'{}' is not a valid amount", v),
            RejectReason::NegativeValue => write!(f, "benefit value must not be negative"),
        }
    }
}

/// Result of an add request. A rejection leaves the configuration untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum AddBenefitOutcome {
    Added(String),
    Rejected(RejectReason),
}

/// Owns the configuration for the selected period.
///
/// Every mutation goes through a method here so that, whenever
/// `use_calculated_days` is set, `refectory_days` equals the business days of
/// the selected month by the time the method returns.
#[derive(Debug, Clone)]
pub struct ConfigurationStore {
    date: DateSelection,
    config: AppConfig,
    business_days: u32,
    template: AppConfig,
}

impl ConfigurationStore {
    pub fn new(date: DateSelection) -> Self {
        let business_days = date.business_days();
        Self::with_template(date, AppConfig::default_for(business_days))
    }

    /// Starts from `template`, which is also what `reset` restores.
    pub fn with_template(date: DateSelection, template: AppConfig) -> Self {
        let business_days = date.business_days();
        let mut store = Self {
            date,
            config: template.clone(),
            business_days,
            template,
        };
        store.sync_days();
        store
    }

    pub fn date(&self) -> DateSelection {
        self.date
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn business_days(&self) -> u32 {
        self.business_days
    }

    pub fn summary(&self) -> CompensationSummary {
        aggregate(&self.config)
    }

    pub fn statement(&self) -> Statement {
        Statement::build(&self.config, self.date)
    }

    fn sync_days(&mut self) {
        if self.config.use_calculated_days {
            self.config.refectory_days = self.business_days;
        }
    }

    pub fn set_date(&mut self, date: DateSelection) {
        self.date = date;
        self.business_days = date.business_days();
        self.sync_days();
        debug!(
            "Period set to {}: {} business days, refectory days {}",
            date, self.business_days, self.config.refectory_days
        );
    }

    /// Manual override of the meal-day count; turns off the calculated mode.
    pub fn set_refectory_days(&mut self, days: u32) {
        self.config.refectory_days = days;
        self.config.use_calculated_days = false;
        debug!("Refectory days manually set to {}", days);
    }

    pub fn use_calculated_days(&mut self) {
        self.config.use_calculated_days = true;
        self.sync_days();
        debug!("Refectory days follow business days ({})", self.business_days);
    }

    pub fn set_plr_enabled(&mut self, enabled: bool) {
        self.config.plr.enabled = enabled;
    }

    pub fn set_va_enabled(&mut self, enabled: bool) {
        self.config.va.enabled = enabled;
    }

    pub fn set_amount(&mut self, field: AmountField, value: Decimal) -> Result<(), CompensationError> {
        if !is_valid_amount(value) {
            return Err(CompensationError::InvalidAmount {
                field: field.name().to_string(),
                value,
            });
        }
        *self.config.amount_mut(field) = value;
        Ok(())
    }

    pub fn add_benefit(&mut self, name: &str, value: &str) -> AddBenefitOutcome {
        let name = name.trim();
        if name.is_empty() {
            return AddBenefitOutcome::Rejected(RejectReason::EmptyName);
        }
        let Some(amount) = parse_amount(value) else {
            warn!("Ignoring benefit '{}' with unparseable value '{}'", name, value);
            return AddBenefitOutcome::Rejected(RejectReason::InvalidValue(value.to_string()));
        };
        if amount < Decimal::ZERO {
            return AddBenefitOutcome::Rejected(RejectReason::NegativeValue);
        }
        if !is_valid_amount(amount) {
            warn!("Ignoring benefit '{}' with out-of-range value {}", name, amount);
            return AddBenefitOutcome::Rejected(RejectReason::InvalidValue(value.to_string()));
        }

        let benefit = OtherBenefit::new(name.to_string(), amount);
        let id = benefit.id.clone();
        self.config.others.push(benefit);
        info!("Added benefit '{}' ({})", name, id);
        AddBenefitOutcome::Added(id)
    }

    /// Removes a user-added benefit. Unknown ids are a no-op; fixed benefits are refused.
    pub fn remove_benefit(&mut self, id: &str) -> Result<Option<OtherBenefit>, CompensationError> {
        let Some(pos) = self.config.others.iter().position(|b| b.id == id) else {
            debug!("No benefit with id {}", id);
            return Ok(None);
        };
        if self.config.others[pos].fixed {
            return Err(CompensationError::FixedBenefit(id.to_string()));
        }
        let removed = self.config.others.remove(pos);
        info!("Removed benefit '{}' ({})", removed.name, removed.id);
        Ok(Some(removed))
    }

    /// Restores the template and re-seeds the day count from the current period.
    pub fn reset(&mut self) {
        self.config = self.template.clone();
        self.config.refectory_days = self.business_days;
        self.sync_days();
        info!("Configuration reset to defaults");
    }
}
