//! Statutory currency rounding

use bigdecimal::{BigDecimal, RoundingMode};

/// Quantize an amount to paise (two fractional digits), rounding half away from zero
///
/// Always returns a value with scale 2, so `1800` comes back as `1800.00`.
pub fn round2(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Zero rupees with scale 2
pub fn zero_amount() -> BigDecimal {
    BigDecimal::from(0).with_scale(2)
}
