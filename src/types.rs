//! Core types shared by the GST and TDS calculators

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::tax::gst::GstCategory;
use crate::tax::tds::TdsNature;
use crate::utils::parsing::exact_decimal;

/// Organization that owns a tax configuration and acts as the seller on its invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: Uuid,
    /// Registered business name
    pub name: String,
    /// GSTIN, if registered
    pub gst_number: Option<String>,
    /// Permanent Account Number
    pub pan: Option<String>,
    /// State code used as the seller state for GST (e.g. "KA")
    pub state: Option<String>,
    /// First day of the financial year
    pub financial_year_start: Option<NaiveDate>,
    /// Reporting currency
    pub currency: String,
    /// When the organization was created
    pub created_at: NaiveDateTime,
}

impl Organization {
    /// Create a new organization with a fresh identifier
    pub fn new(name: String, state: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            gst_number: None,
            pan: None,
            state,
            financial_year_start: None,
            currency: "INR".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Per-organization tax rates, resolved before any calculation runs
///
/// GST slab rates default to the statutory 0/5/12/18/28 percent. The TDS table only
/// holds natures the organization has configured; anything absent withholds nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// Organization this configuration belongs to
    pub organization_id: Uuid,
    /// Configured percentage for each GST slab
    #[serde(
        default = "default_gst_rates",
        deserialize_with = "exact_decimal::deserialize_map"
    )]
    pub gst_rates: HashMap<GstCategory, BigDecimal>,
    /// Configured withholding percentage for each payment nature
    #[serde(default, deserialize_with = "exact_decimal::deserialize_map")]
    pub tds_rates: HashMap<TdsNature, BigDecimal>,
}

fn default_gst_rates() -> HashMap<GstCategory, BigDecimal> {
    GstCategory::ALL
        .iter()
        .map(|category| (*category, category.statutory_rate()))
        .collect()
}

impl TaxConfiguration {
    /// Create a configuration with statutory GST slabs and an empty TDS table
    pub fn new(organization_id: Uuid) -> Self {
        Self {
            organization_id,
            gst_rates: default_gst_rates(),
            tds_rates: HashMap::new(),
        }
    }

    /// Set the withholding rate for a payment nature
    pub fn with_tds_rate(mut self, nature: TdsNature, rate: BigDecimal) -> Self {
        self.tds_rates.insert(nature, rate);
        self
    }

    /// Override the rate of a GST slab
    pub fn with_gst_rate(mut self, category: GstCategory, rate: BigDecimal) -> Self {
        self.gst_rates.insert(category, rate);
        self
    }

    /// Configured rate for a GST slab, falling back to the statutory rate
    pub fn gst_rate(&self, category: GstCategory) -> BigDecimal {
        self.gst_rates
            .get(&category)
            .cloned()
            .unwrap_or_else(|| category.statutory_rate())
    }

    /// Configured withholding rate for a payment nature, if any
    pub fn tds_rate(&self, nature: TdsNature) -> Option<&BigDecimal> {
        self.tds_rates.get(&nature)
    }
}

/// Errors raised around the tax calculators
///
/// The calculators themselves never fail; these come from parsing input, validating it,
/// and fetching configuration.
#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid argument for '{field}': cannot parse '{value}' as a decimal")]
    InvalidArgument { field: String, value: String },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse { path: String, message: String },
}

/// Result type for tax operations
pub type TaxResult<T> = Result<T, TaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_configuration_has_statutory_slabs() {
        let config = TaxConfiguration::new(Uuid::new_v4());
        assert_eq!(config.gst_rate(GstCategory::Nil), BigDecimal::from(0));
        assert_eq!(config.gst_rate(GstCategory::Higher), BigDecimal::from(18));
        assert_eq!(config.gst_rate(GstCategory::Luxury), BigDecimal::from(28));
        assert!(config.tds_rate(TdsNature::Contractor).is_none());
    }

    #[test]
    fn test_configuration_overrides() {
        let config = TaxConfiguration::new(Uuid::new_v4())
            .with_gst_rate(GstCategory::Standard, BigDecimal::from(13))
            .with_tds_rate(TdsNature::Contractor, BigDecimal::from(2));

        assert_eq!(config.gst_rate(GstCategory::Standard), BigDecimal::from(13));
        assert_eq!(
            config.tds_rate(TdsNature::Contractor),
            Some(&BigDecimal::from(2))
        );
    }

    #[test]
    fn test_missing_slab_falls_back_to_statutory_rate() {
        let mut config = TaxConfiguration::new(Uuid::new_v4());
        config.gst_rates.clear();
        assert_eq!(config.gst_rate(GstCategory::Reduced), BigDecimal::from(5));
    }

    #[test]
    fn test_organization_defaults() {
        let org = Organization::new("Test Org".to_string(), Some("KA".to_string()));
        assert_eq!(org.currency, "INR");
        assert_eq!(org.state.as_deref(), Some("KA"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = TaxError::InvalidArgument {
            field: "quantity".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument for 'quantity': cannot parse 'ten' as a decimal"
        );
    }
}
