//! Turning caller-supplied text into decimals before any calculation runs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::tax::gst::LineItem;
use crate::types::*;

/// Most significant digits accepted in one amount or rate
pub const MAX_DIGITS: usize = 32;

/// Most fractional digits accepted in one amount or rate
pub const MAX_FRACTION_DIGITS: usize = 16;

/// Parse a plain decimal literal such as `-1234.5678`
///
/// Exponent notation is refused, along with anything longer than [`MAX_DIGITS`] digits or
/// [`MAX_FRACTION_DIGITS`] fractional digits, so every accepted value stays small enough
/// to calculate with.
pub fn parse_exact_decimal(text: &str) -> Result<BigDecimal, String> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let plain = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !plain(whole) || !plain(fraction) {
        return Err(format!("'{}' is not a plain decimal number", text));
    }
    if whole.len() + fraction.len() > MAX_DIGITS || fraction.len() > MAX_FRACTION_DIGITS {
        return Err(format!("'{}' has too many digits", text));
    }

    let literal = if text.starts_with('-') { text } else { unsigned };
    BigDecimal::from_str(literal).map_err(|e| e.to_string())
}

/// Parse one numeric field; a missing field counts as zero
pub fn parse_decimal(field: &str, raw: Option<&str>) -> TaxResult<BigDecimal> {
    let Some(raw) = raw else {
        return Ok(BigDecimal::from(0));
    };

    parse_exact_decimal(raw).map_err(|_| TaxError::InvalidArgument {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Serde support for decimals that must never pass through `f64`
///
/// Accepts strings holding a plain decimal and integer literals. Fractional numbers in
/// YAML or JSON reach serde as binary floats, so they are refused; quote them instead.
pub mod exact_decimal {
    use bigdecimal::BigDecimal;
    use serde::de::{self, Deserializer, Visitor};
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::fmt;
    use std::hash::Hash;

    struct ExactDecimalVisitor;

    impl<'de> Visitor<'de> for ExactDecimalVisitor {
        type Value = BigDecimal;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a quoted decimal string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
            super::parse_exact_decimal(v).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
            Ok(BigDecimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
            Ok(BigDecimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
            Err(E::custom(format!(
                "{} was read as a binary float; quote decimal values",
                v
            )))
        }
    }

    struct ExactDecimal(BigDecimal);

    impl<'de> Deserialize<'de> for ExactDecimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer
                .deserialize_any(ExactDecimalVisitor)
                .map(ExactDecimal)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        ExactDecimal::deserialize(deserializer).map(|d| d.0)
    }

    /// Deserialize a map whose values are exact decimals
    pub fn deserialize_map<'de, D, K>(
        deserializer: D,
    ) -> Result<HashMap<K, BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Eq + Hash,
    {
        let map = HashMap::<K, ExactDecimal>::deserialize(deserializer)?;
        Ok(map.into_iter().map(|(k, v)| (k, v.0)).collect())
    }
}

/// Invoice line as received from an API request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit_price: Option<String>,
    #[serde(default)]
    pub gst_rate: Option<String>,
}

impl RawLineItem {
    pub fn new(quantity: &str, unit_price: &str, gst_rate: &str) -> Self {
        Self {
            quantity: Some(quantity.to_string()),
            unit_price: Some(unit_price.to_string()),
            gst_rate: Some(gst_rate.to_string()),
        }
    }

    /// Parse every field, failing on the first one that is not a decimal
    pub fn parse(&self) -> TaxResult<LineItem> {
        Ok(LineItem::new(
            parse_decimal("quantity", self.quantity.as_deref())?,
            parse_decimal("unit_price", self.unit_price.as_deref())?,
            parse_decimal("gst_rate", self.gst_rate.as_deref())?,
        ))
    }
}

/// Payment as received from an API request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPayment {
    #[serde(default)]
    pub gross_payment: Option<String>,
}

impl RawPayment {
    pub fn new(gross_payment: &str) -> Self {
        Self {
            gross_payment: Some(gross_payment.to_string()),
        }
    }

    pub fn parse(&self) -> TaxResult<BigDecimal> {
        parse_decimal("gross_payment", self.gross_payment.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_keeps_exact_digits() {
        let value = parse_decimal("unit_price", Some("0.3333")).unwrap();
        assert_eq!(value, BigDecimal::from_str("0.3333").unwrap());
        assert_eq!(value.as_bigint_and_exponent().1, 4);
    }

    #[test]
    fn test_parse_decimal_trims_whitespace() {
        let value = parse_decimal("quantity", Some(" 10 ")).unwrap();
        assert_eq!(value, BigDecimal::from(10));
    }

    #[test]
    fn test_missing_field_is_zero() {
        assert_eq!(parse_decimal("quantity", None).unwrap(), BigDecimal::from(0));

        let line = RawLineItem::default().parse().unwrap();
        assert_eq!(line.quantity, BigDecimal::from(0));
        assert_eq!(line.unit_price, BigDecimal::from(0));
        assert_eq!(line.gst_rate, BigDecimal::from(0));
    }

    #[test]
    fn test_unparseable_field_is_invalid_argument() {
        let raw = RawLineItem::new("10", "abc", "18");
        match raw.parse() {
            Err(TaxError::InvalidArgument { field, value }) => {
                assert_eq!(field, "unit_price");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_exponent_notation_is_invalid_argument() {
        for raw in ["1e40000000000", "1E3", "2.5e-1"] {
            assert!(matches!(
                parse_decimal("quantity", Some(raw)),
                Err(TaxError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_oversized_literals_are_invalid_argument() {
        let long_whole = "9".repeat(MAX_DIGITS + 1);
        let long_fraction = format!("0.{}", "1".repeat(MAX_FRACTION_DIGITS + 1));

        assert!(parse_decimal("unit_price", Some(&long_whole)).is_err());
        assert!(parse_decimal("gst_rate", Some(&long_fraction)).is_err());
        assert!(parse_decimal("unit_price", Some(&"9".repeat(MAX_DIGITS))).is_ok());
    }

    #[test]
    fn test_plain_literal_forms() {
        assert_eq!(
            parse_exact_decimal("-12.50").unwrap(),
            BigDecimal::from_str("-12.5").unwrap()
        );
        assert_eq!(parse_exact_decimal("+7").unwrap(), BigDecimal::from(7));
        for bad in ["", ".", "-", "1_000", "1.2.3", "NaN", "0x10", " - 1"] {
            assert!(parse_exact_decimal(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_raw_payment() {
        assert_eq!(
            RawPayment::new("100000.00").parse().unwrap(),
            BigDecimal::from(100000)
        );
        assert!(matches!(
            RawPayment::new("1,00,000").parse(),
            Err(TaxError::InvalidArgument { .. })
        ));
        assert_eq!(RawPayment::default().parse().unwrap(), BigDecimal::from(0));
    }

    #[test]
    fn test_raw_line_item_from_json() {
        let raw: RawLineItem =
            serde_json::from_str(r#"{"quantity": "2", "unit_price": "49.50"}"#).unwrap();
        let line = raw.parse().unwrap();
        assert_eq!(line.taxable_value(), BigDecimal::from(99));
        assert_eq!(line.gst_rate, BigDecimal::from(0));
    }
}
