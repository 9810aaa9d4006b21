use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CompensationError;
use crate::model::benefit::{OtherBenefit, ToggledBenefit};

/// Upper bound for any single amount. Keeps every product and sum in the aggregation
/// well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

pub fn is_valid_amount(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= MAX_AMOUNT
}

/// Monetary fields that can be edited through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Salary,
    RefectoryDaily,
    HealthPlan,
    LifeInsurance,
    PlrAnnual,
    VaMonthly,
}

impl AmountField {
    pub fn name(&self) -> &'static str {
        match self {
            AmountField::Salary => "salary",
            AmountField::RefectoryDaily => "refectory_daily",
            AmountField::HealthPlan => "health_plan",
            AmountField::LifeInsurance => "life_insurance",
            AmountField::PlrAnnual => "plr_annual",
            AmountField::VaMonthly => "va_monthly",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub salary: Decimal,
    pub refectory_daily: Decimal,
    pub refectory_days: u32,
    pub use_calculated_days: bool,
    pub health_plan: Decimal,
    pub life_insurance: Decimal,
    /// Profit share, entered as an annual estimate.
    pub plr: ToggledBenefit,
    /// Flat monthly meal voucher.
    pub va: ToggledBenefit,
    #[serde(default)]
    pub others: Vec<OtherBenefit>,
}

impl AppConfig {
    /// The seeded configuration, with the meal-day count taken from the given business days.
    pub fn default_for(business_days: u32) -> Self {
        Self {
            salary: dec!(1800),
            refectory_daily: dec!(24),
            refectory_days: business_days,
            use_calculated_days: true,
            health_plan: dec!(550),
            life_insurance: dec!(150),
            plr: ToggledBenefit::annual(dec!(18000), false),
            va: ToggledBenefit::monthly(dec!(200), true),
            others: vec![
                OtherBenefit::fixed("sys_wellhub", "Auxílio Wellhub (Gympass)", dec!(30)),
                OtherBenefit::fixed("sys_dep_health", "Plano de Saúde - Dep. (Filho 5 anos)", dec!(220)),
            ],
        }
    }

    pub fn amount(&self, field: AmountField) -> Decimal {
        match field {
            AmountField::Salary => self.salary,
            AmountField::RefectoryDaily => self.refectory_daily,
            AmountField::HealthPlan => self.health_plan,
            AmountField::LifeInsurance => self.life_insurance,
            AmountField::PlrAnnual => self.plr.amount,
            AmountField::VaMonthly => self.va.amount,
        }
    }

    pub(crate) fn amount_mut(&mut self, field: AmountField) -> &mut Decimal {
        match field {
            AmountField::Salary => &mut self.salary,
            AmountField::RefectoryDaily => &mut self.refectory_daily,
            AmountField::HealthPlan => &mut self.health_plan,
            AmountField::LifeInsurance => &mut self.life_insurance,
            AmountField::PlrAnnual => &mut self.plr.amount,
            AmountField::VaMonthly => &mut self.va.amount,
        }
    }

    /// Checks that every amount lies in `0..=MAX_AMOUNT` and benefit ids are unique.
    pub fn validate(&self) -> Result<(), CompensationError> {
        let fields = [
            AmountField::Salary,
            AmountField::RefectoryDaily,
            AmountField::HealthPlan,
            AmountField::LifeInsurance,
            AmountField::PlrAnnual,
            AmountField::VaMonthly,
        ];
        for field in fields {
            let value = self.amount(field);
            if !is_valid_amount(value) {
                return Err(CompensationError::InvalidAmount {
                    field: field.name().to_string(),
                    value,
                });
            }
        }

        let mut seen = HashSet::new();
        for benefit in &self.others {
            if !is_valid_amount(benefit.value) {
                return Err(CompensationError::InvalidAmount {
                    field: benefit.name.clone(),
                    value: benefit.value,
                });
            }
            if !seen.insert(benefit.id.as_str()) {
                return Err(CompensationError::DuplicateBenefitId(benefit.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let config = AppConfig::default_for(22);
        assert_eq!(config.refectory_days, 22);
        assert!(config.use_calculated_days);
        assert!(!config.plr.enabled);
        assert!(config.va.enabled);
        assert_eq!(config.others.len(), 2);
        assert!(config.others.iter().all(|b| b.fixed));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut config = AppConfig::default_for(20);
        config.health_plan = dec!(-1);
        assert_eq!(
            config.validate(),
            Err(CompensationError::InvalidAmount { field: "health_plan".to_string(), value: dec!(-1) })
        );
    }

    #[test]
    fn test_validate_rejects_amount_above_limit() {
        let mut config = AppConfig::default_for(20);
        config.refectory_daily = Decimal::MAX;
        assert!(matches!(config.validate(), Err(CompensationError::InvalidAmount { .. })));

        let mut config = AppConfig::default_for(20);
        config.others.push(OtherBenefit::new("Huge".to_string(), MAX_AMOUNT + dec!(0.01)));
        assert_eq!(
            config.validate(),
            Err(CompensationError::InvalidAmount { field: "Huge".to_string(), value: dec!(1000000000.01) })
        );

        let mut config = AppConfig::default_for(20);
        config.salary = MAX_AMOUNT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut config = AppConfig::default_for(20);
        config.others.push(OtherBenefit::fixed("sys_wellhub", "Copy", dec!(1)));
        assert_eq!(
            config.validate(),
            Err(CompensationError::DuplicateBenefitId("sys_wellhub".to_string()))
        );
    }

    #[test]
    fn test_json_round_trip_keeps_decimals() {
        let config = AppConfig::default_for(21);
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
