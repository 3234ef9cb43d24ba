//! Validation utilities

use bigdecimal::BigDecimal;

use crate::tax::gst::LineItem;
use crate::traits::*;
use crate::types::*;

/// Validate that an amount is not negative
pub fn validate_non_negative(field: &str, amount: &BigDecimal) -> TaxResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(TaxError::Validation(format!("{} cannot be negative", field)))
    } else {
        Ok(())
    }
}

/// Validate that a rate is a percentage between 0 and 100
pub fn validate_percentage(field: &str, rate: &BigDecimal) -> TaxResult<()> {
    validate_non_negative(field, rate)?;

    if *rate > BigDecimal::from(100) {
        return Err(TaxError::Validation(format!(
            "{} cannot exceed 100 percent",
            field
        )));
    }

    Ok(())
}

/// Validator that rejects negative amounts and rates outside 0-100
pub struct StrictAmountValidator;

impl AmountValidator for StrictAmountValidator {
    fn validate_line_item(&self, line: &LineItem) -> TaxResult<()> {
        validate_non_negative("quantity", &line.quantity)?;
        validate_non_negative("unit_price", &line.unit_price)?;
        validate_percentage("gst_rate", &line.gst_rate)?;
        Ok(())
    }

    fn validate_payment(&self, gross_payment: &BigDecimal) -> TaxResult<()> {
        validate_non_negative("gross_payment", gross_payment)
    }
}
