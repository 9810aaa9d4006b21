use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Monthly,
    Annual,
}

const MONTHS_PER_YEAR: i64 = 12;

/// An optional benefit that only counts when switched on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToggledBenefit {
    pub enabled: bool,
    pub amount: Decimal,
    pub cadence: Cadence,
}

impl ToggledBenefit {
    pub fn monthly(amount: Decimal, enabled: bool) -> Self {
        Self { enabled, amount, cadence: Cadence::Monthly }
    }

    pub fn annual(amount: Decimal, enabled: bool) -> Self {
        Self { enabled, amount, cadence: Cadence::Annual }
    }

    /// The amount as it enters a single month, regardless of the toggle.
    pub fn per_month(&self) -> Decimal {
        match self.cadence {
            Cadence::Monthly => self.amount,
            Cadence::Annual => self.amount / Decimal::from(MONTHS_PER_YEAR),
        }
    }

    /// Monthly contribution to the statement; zero while disabled.
    pub fn contribution(&self) -> Decimal {
        if self.enabled {
            self.per_month()
        } else {
            Decimal::ZERO
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OtherBenefit {
    pub id: String,
    pub name: String,
    pub value: Decimal,
    #[serde(default)]
    pub fixed: bool,
}

impl OtherBenefit {
    /// A user-added, removable benefit with a fresh id.
    pub fn new(name: String, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name,
            value,
            fixed: false,
        }
    }

    pub fn fixed(id: &str, name: &str, value: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value,
            fixed: true,
        }
    }
}
