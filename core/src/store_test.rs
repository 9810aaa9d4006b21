#[cfg(test)]
mod tests {
    use crate::calendar::{business_days, DateSelection};
    use crate::error::CompensationError;
    use crate::model::config::{AmountField, AppConfig, MAX_AMOUNT};
    use crate::store::{AddBenefitOutcome, ConfigurationStore, RejectReason};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn february_2024() -> ConfigurationStore {
        ConfigurationStore::new(DateSelection::new(2024, 1))
    }

    fn assert_days_in_sync(store: &ConfigurationStore) {
        if store.config().use_calculated_days {
            assert_eq!(store.config().refectory_days, business_days(store.date().year, store.date().month as i32));
        }
    }

    #[test]
    fn test_new_store_seeds_business_days() {
        let store = february_2024();
        assert_eq!(store.business_days(), 21);
        assert_eq!(store.config().refectory_days, 21);
        assert_eq!(store.summary().grand_total, dec!(1800) + dec!(24) * dec!(21) + dec!(1150));
    }

    #[test]
    fn test_date_change_propagates_when_calculated() {
        let mut store = february_2024();
        store.set_date(DateSelection::new(2025, 0));
        assert_eq!(store.business_days(), 23);
        assert_eq!(store.config().refectory_days, 23);
        assert_days_in_sync(&store);
    }

    #[test]
    fn test_manual_days_survive_date_change() {
        let mut store = february_2024();
        store.set_refectory_days(15);
        assert!(!store.config().use_calculated_days);

        store.set_date(DateSelection::new(2025, 0));
        assert_eq!(store.business_days(), 23);
        assert_eq!(store.config().refectory_days, 15);
        assert_eq!(store.summary().meal_allowance_total, dec!(360));
    }

    #[test]
    fn test_reenabling_calculated_days_is_immediate() {
        let mut store = february_2024();
        store.set_refectory_days(5);
        store.set_date(DateSelection::new(2025, 0));
        store.use_calculated_days();

        assert!(store.config().use_calculated_days);
        assert_eq!(store.config().refectory_days, 23);
        assert_days_in_sync(&store);
    }

    #[test]
    fn test_invariant_holds_across_operations() {
        let mut store = february_2024();
        let mut date = store.date();
        for step in 0..30 {
            date = date.next_month();
            store.set_date(date);
            match step % 5 {
                0 => store.set_refectory_days(step),
                1 => store.use_calculated_days(),
                2 => store.reset(),
                3 => store.set_plr_enabled(step % 2 == 0),
                _ => {}
            }
            assert_days_in_sync(&store);
        }
    }

    #[test]
    fn test_add_benefit() {
        let mut store = february_2024();
        let before = store.summary().others_total;

        let outcome = store.add_benefit("  Auxílio Home Office ", "120,50");
        let AddBenefitOutcome::Added(id) = outcome else {
            panic!("expected benefit to be added");
        };

        let added = store.config().others.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.name, "Auxílio Home Office");
        assert_eq!(added.value, dec!(120.50));
        assert!(!added.fixed);
        assert_eq!(store.summary().others_total, before + dec!(120.5));
    }

    #[test]
    fn test_add_benefit_rejections_leave_state_unchanged() {
        let mut store = february_2024();
        let before = store.config().clone();

        assert_eq!(store.add_benefit("", "10"), AddBenefitOutcome::Rejected(RejectReason::EmptyName));
        assert_eq!(store.add_benefit("   ", "10"), AddBenefitOutcome::Rejected(RejectReason::EmptyName));
        assert_eq!(
            store.add_benefit("Gym", "ten"),
            AddBenefitOutcome::Rejected(RejectReason::InvalidValue("ten".to_string()))
        );
        assert_eq!(
            store.add_benefit("Gym", ""),
            AddBenefitOutcome::Rejected(RejectReason::InvalidValue(String::new()))
        );
        assert_eq!(store.add_benefit("Gym", "-5"), AddBenefitOutcome::Rejected(RejectReason::NegativeValue));

        assert_eq!(store.config(), &before);
    }

    #[test]
    fn test_oversized_benefits_are_rejected() {
        let mut store = february_2024();
        let before = store.config().clone();
        let huge = Decimal::MAX.to_string();

        assert_eq!(
            store.add_benefit("A", &huge),
            AddBenefitOutcome::Rejected(RejectReason::InvalidValue(huge.clone()))
        );
        assert_eq!(
            store.add_benefit("A", "1000000000,01"),
            AddBenefitOutcome::Rejected(RejectReason::InvalidValue("1000000000,01".to_string()))
        );
        assert_eq!(store.config(), &before);

        assert!(matches!(store.add_benefit("A", "1000000000"), AddBenefitOutcome::Added(_)));
        assert!(matches!(store.add_benefit("B", "1000000000"), AddBenefitOutcome::Added(_)));
        assert_eq!(store.summary().others_total, dec!(2000000250));
    }

    #[test]
    fn test_remove_benefit() {
        let mut store = february_2024();
        let AddBenefitOutcome::Added(id) = store.add_benefit("Transporte", "80") else {
            panic!("expected benefit to be added");
        };
        let total_with = store.summary().others_total;
        let count_with = store.config().others.len();

        let removed = store.remove_benefit(&id).unwrap().unwrap();
        assert_eq!(removed.value, dec!(80));
        assert_eq!(store.config().others.len(), count_with - 1);
        assert_eq!(store.summary().others_total, total_with - dec!(80));
    }

    #[test]
    fn test_remove_unknown_benefit_is_noop() {
        let mut store = february_2024();
        let before = store.config().clone();
        assert_eq!(store.remove_benefit("does-not-exist"), Ok(None));
        assert_eq!(store.config(), &before);
    }

    #[test]
    fn test_fixed_benefits_are_not_removable() {
        let mut store = february_2024();
        assert_eq!(
            store.remove_benefit("sys_wellhub"),
            Err(CompensationError::FixedBenefit("sys_wellhub".to_string()))
        );
        assert_eq!(store.config().others.len(), 2);
    }

    #[test]
    fn test_plr_toggle_through_store() {
        let mut store = february_2024();
        let base = store.summary().grand_total;
        store.set_plr_enabled(true);
        assert_eq!(store.summary().grand_total - base, dec!(1500));
        store.set_plr_enabled(false);
        assert_eq!(store.summary().grand_total, base);
    }

    #[test]
    fn test_set_amount_validates() {
        let mut store = february_2024();
        store.set_amount(AmountField::Salary, dec!(2500)).unwrap();
        assert_eq!(store.config().salary, dec!(2500));

        let err = store.set_amount(AmountField::VaMonthly, dec!(-1)).unwrap_err();
        assert_eq!(
            err,
            CompensationError::InvalidAmount { field: "va_monthly".to_string(), value: dec!(-1) }
        );
        assert_eq!(store.config().va.amount, dec!(200));
    }

    #[test]
    fn test_set_amount_rejects_oversized_values() {
        let mut store = february_2024();
        let err = store.set_amount(AmountField::RefectoryDaily, Decimal::MAX).unwrap_err();
        assert_eq!(
            err,
            CompensationError::InvalidAmount { field: "refectory_daily".to_string(), value: Decimal::MAX }
        );
        assert_eq!(store.config().refectory_daily, dec!(24));

        store.set_amount(AmountField::RefectoryDaily, MAX_AMOUNT).unwrap();
        store.set_refectory_days(u32::MAX);
        let summary = store.summary();
        assert_eq!(summary.meal_allowance_total, MAX_AMOUNT * Decimal::from(u32::MAX));
        assert!(summary.grand_total > summary.meal_allowance_total);
    }

    #[test]
    fn test_reset_restores_defaults_with_current_days() {
        let mut store = february_2024();
        store.set_refectory_days(3);
        store.set_va_enabled(false);
        store.add_benefit("Extra", "10");
        store.set_date(DateSelection::new(2025, 0));

        store.reset();
        assert_eq!(store.config(), &AppConfig::default_for(23));
    }

    #[test]
    fn test_custom_template() {
        let mut template = AppConfig::default_for(0);
        template.salary = dec!(5000);
        template.others.clear();
        let mut store = ConfigurationStore::with_template(DateSelection::new(2025, 0), template);

        assert_eq!(store.config().refectory_days, 23);
        store.set_amount(AmountField::Salary, dec!(1)).unwrap();
        store.reset();
        assert_eq!(store.config().salary, dec!(5000));
        assert_eq!(store.summary().others_total, Decimal::ZERO);
    }
}
