use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised at the configuration boundary. The calculation itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompensationError {
    #[error("invalid amount for {field}: {value} (must be between 0 and {max})", max = crate::model::config::MAX_AMOUNT)]
    InvalidAmount { field: String, value: Decimal },

    #[error("benefit '{0}' is fixed and cannot be removed")]
    FixedBenefit(String),

    #[error("duplicate benefit id '{0}'")]
    DuplicateBenefitId(String),
}
