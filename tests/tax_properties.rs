//! Property tests for the GST split and TDS conservation rules

use bigdecimal::BigDecimal;
use bizbooks_tax::{
    round2, GstCalculator, LineItem, TaxConfiguration, TdsCalculator, TdsNature,
};
use proptest::prelude::*;
use std::str::FromStr;

fn decimal(whole: u64, frac: u32, digits: usize) -> BigDecimal {
    BigDecimal::from_str(&format!("{}.{:0width$}", whole, frac, width = digits)).unwrap()
}

fn scale(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

fn odd_paisa(amount: &BigDecimal) -> bool {
    let half = round2(&(amount / &BigDecimal::from(2)));
    &half + &half != *amount
}

fn line_strategy() -> impl Strategy<Value = LineItem> {
    (
        (0u64..1_000, 0u32..1_000),
        (0u64..100_000, 0u32..10_000),
        (0u64..=28, 0u32..100),
    )
        .prop_map(|((qw, qf), (pw, pf), (rw, rf))| {
            LineItem::new(decimal(qw, qf, 3), decimal(pw, pf, 4), decimal(rw, rf, 2))
        })
}

proptest! {
    #[test]
    fn intra_state_halves_are_equal(line in line_strategy()) {
        let result = GstCalculator::new().calculate(&line, Some("KA"), Some("KA"));
        let half = round2(&(&result.tax_amount / &BigDecimal::from(2)));

        prop_assert_eq!(&result.cgst_amount, &half);
        prop_assert_eq!(&result.sgst_amount, &half);
        prop_assert_eq!(&result.igst_amount, &BigDecimal::from(0));
    }

    #[test]
    fn inter_state_is_all_igst(line in line_strategy(), buyer in prop::option::of("[A-Z]{2}")) {
        prop_assume!(buyer.as_deref() != Some("KA"));
        let result = GstCalculator::new().calculate(&line, Some("KA"), buyer.as_deref());

        prop_assert_eq!(&result.igst_amount, &result.tax_amount);
        prop_assert_eq!(&result.cgst_amount, &BigDecimal::from(0));
        prop_assert_eq!(&result.sgst_amount, &BigDecimal::from(0));
    }

    #[test]
    fn components_add_up_to_tax(line in line_strategy(), same_state in any::<bool>()) {
        let buyer = if same_state { "KA" } else { "MH" };
        let result = GstCalculator::new().calculate(&line, Some("KA"), Some(buyer));

        let components = &result.cgst_amount + &result.sgst_amount + &result.igst_amount;
        let residual = &components - &result.tax_amount;
        if same_state && odd_paisa(&result.tax_amount) {
            prop_assert_eq!(residual, BigDecimal::from_str("0.01").unwrap());
        } else {
            prop_assert_eq!(residual, BigDecimal::from(0));
        }
        for amount in [
            &result.tax_amount,
            &result.cgst_amount,
            &result.sgst_amount,
            &result.igst_amount,
        ] {
            prop_assert_eq!(scale(amount), 2);
        }
    }

    #[test]
    fn tds_conserves_two_digit_payments(
        whole in 0u64..10_000_000,
        paise in 0u32..100,
        rate_whole in 0u64..=30,
        rate_frac in 0u32..100,
    ) {
        let gross = decimal(whole, paise, 2);
        let config = TaxConfiguration::new(uuid::Uuid::new_v4())
            .with_tds_rate(TdsNature::Contractor, decimal(rate_whole, rate_frac, 2));
        let result = TdsCalculator::with_configuration(config).calculate(&gross, "CONTRACTOR");

        prop_assert_eq!(&result.tds_amount + &result.net_payment, gross);
        prop_assert_eq!(scale(&result.tds_amount), 2);
        prop_assert_eq!(scale(&result.net_payment), 2);
    }

    #[test]
    fn unmatched_nature_withholds_nothing(
        whole in 0u64..10_000_000,
        paise in 0u32..100,
        nature in "[a-z ]{0,20}",
    ) {
        prop_assume!(!nature.to_uppercase().contains("CONTRACTOR"));
        let gross = decimal(whole, paise, 2);
        let config = TaxConfiguration::new(uuid::Uuid::new_v4())
            .with_tds_rate(TdsNature::Contractor, BigDecimal::from(10));
        let result = TdsCalculator::with_configuration(config).calculate(&gross, &nature);

        prop_assert_eq!(&result.tds_amount, &BigDecimal::from(0));
        prop_assert_eq!(&result.net_payment, &gross);
    }
}
