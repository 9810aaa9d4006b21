use rust_decimal::Decimal;

use crate::model::config::AppConfig;
use crate::service::dto::{Category, CompensationSummary, LineItem};

pub const LABEL_SALARY: &str = "Salário Base";
pub const LABEL_PLR: &str = "PLR (Estimado/Mensalizado)";
pub const LABEL_REFECTORY: &str = "Refeitório";
pub const LABEL_VOUCHER: &str = "Vale Alimentação";
pub const LABEL_HEALTH_PLAN: &str = "Plano de Saúde (Empresa)";
pub const LABEL_LIFE_INSURANCE: &str = "Seguro de Vida";

pub fn meal_allowance_total(config: &AppConfig) -> Decimal {
    config.refectory_daily * Decimal::from(config.refectory_days)
}

/// Flattens a configuration into statement lines. Disabled toggles produce no line.
pub fn line_items(config: &AppConfig) -> Vec<LineItem> {
    let mut items = vec![LineItem::new(Category::Direct, LABEL_SALARY, config.salary)];
    if config.plr.enabled {
        items.push(LineItem::new(Category::Direct, LABEL_PLR, config.plr.contribution()));
    }

    items.push(LineItem::new(Category::Meal, LABEL_REFECTORY, meal_allowance_total(config)));
    if config.va.enabled {
        items.push(LineItem::new(Category::Meal, LABEL_VOUCHER, config.va.contribution()));
    }

    items.push(LineItem::new(Category::Health, LABEL_HEALTH_PLAN, config.health_plan));
    items.push(LineItem::new(Category::Health, LABEL_LIFE_INSURANCE, config.life_insurance));

    items.extend(
        config.others.iter()
            .map(|b| LineItem::new(Category::Others, b.name.clone(), b.value)),
    );
    items
}

fn fold(items: &[LineItem], category: Option<Category>) -> Decimal {
    items.iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .fold(Decimal::ZERO, |acc, item| acc + item.amount)
}

pub fn aggregate(config: &AppConfig) -> CompensationSummary {
    let items = line_items(config);

    CompensationSummary {
        meal_allowance_total: meal_allowance_total(config),
        plr_monthly: config.plr.contribution(),
        voucher_total: config.va.contribution(),
        others_total: fold(&items, Some(Category::Others)),
        direct_total: fold(&items, Some(Category::Direct)),
        meal_total: fold(&items, Some(Category::Meal)),
        health_total: fold(&items, Some(Category::Health)),
        grand_total: fold(&items, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::benefit::OtherBenefit;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_configuration_total() {
        for business_days in [20u32, 21, 22, 23] {
            let summary = aggregate(&AppConfig::default_for(business_days));
            let expected = dec!(1800) + dec!(24) * Decimal::from(business_days)
                + dec!(550) + dec!(150) + dec!(200) + dec!(250);
            assert_eq!(summary.grand_total, expected);
            assert_eq!(summary.others_total, dec!(250));
            assert_eq!(summary.plr_monthly, Decimal::ZERO);
        }
    }

    #[test]
    fn test_subtotals() {
        let mut config = AppConfig::default_for(21);
        config.plr.enabled = true;
        let summary = aggregate(&config);

        assert_eq!(summary.meal_allowance_total, dec!(504));
        assert_eq!(summary.plr_monthly, dec!(1500));
        assert_eq!(summary.direct_total, dec!(3300));
        assert_eq!(summary.meal_total, dec!(704));
        assert_eq!(summary.health_total, dec!(700));
        assert_eq!(summary.others_total, dec!(250));
        assert_eq!(summary.grand_total, dec!(4954));
    }

    #[test]
    fn test_meal_allowance_is_linear_in_days() {
        let mut config = AppConfig::default_for(0);
        for days in 0..=31u32 {
            config.refectory_days = days;
            assert_eq!(aggregate(&config).meal_allowance_total, dec!(24) * Decimal::from(days));
        }
    }

    #[test]
    fn test_plr_toggle_round_trip() {
        let mut config = AppConfig::default_for(22);
        let base = aggregate(&config).grand_total;

        config.plr.enabled = true;
        let with_plr = aggregate(&config).grand_total;
        assert_eq!(with_plr - base, config.plr.amount / dec!(12));

        config.plr.enabled = false;
        assert_eq!(aggregate(&config).grand_total, base);
    }

    #[test]
    fn test_voucher_toggle() {
        let mut config = AppConfig::default_for(22);
        config.va.enabled = false;
        let summary = aggregate(&config);
        assert_eq!(summary.voucher_total, Decimal::ZERO);
        assert_eq!(summary.meal_total, summary.meal_allowance_total);
        assert!(!line_items(&config).iter().any(|i| i.label == LABEL_VOUCHER));
    }

    #[test]
    fn test_grand_total_is_sum_of_categories() {
        let mut config = AppConfig::default_for(19);
        config.plr.enabled = true;
        config.plr.amount = dec!(12345.60);
        config.others.push(OtherBenefit::new("Home office".to_string(), dec!(99.99)));
        config.others.push(OtherBenefit::new("Transporte".to_string(), dec!(0.01)));

        let summary = aggregate(&config);
        let by_category: Decimal = Category::ALL.iter().map(|c| summary.subtotal(*c)).sum();
        assert_eq!(summary.grand_total, by_category);
        assert_eq!(
            summary.grand_total,
            config.salary + summary.meal_allowance_total + config.health_plan + config.life_insurance
                + summary.plr_monthly + summary.voucher_total + summary.others_total
        );
    }

    #[test]
    fn test_empty_others() {
        let mut config = AppConfig::default_for(20);
        config.others.clear();
        let summary = aggregate(&config);
        assert_eq!(summary.others_total, Decimal::ZERO);
    }
}
