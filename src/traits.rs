//! Traits for storage abstraction and boundary validation

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::tax::gst::LineItem;
use crate::types::*;

/// Storage abstraction for organizations and their tax configuration
///
/// The calculators never talk to storage. The engine reads a configuration snapshot
/// through this trait and hands it to a calculator, so any backend (PostgreSQL, SQLite,
/// in-memory, etc.) can sit behind it.
#[async_trait]
pub trait TaxConfigurationStore: Send + Sync {
    /// Save an organization
    async fn save_organization(&mut self, organization: &Organization) -> TaxResult<()>;

    /// Get an organization by ID
    async fn get_organization(&self, organization_id: Uuid) -> TaxResult<Option<Organization>>;

    /// Save the tax configuration of an organization, replacing any previous one
    async fn save_tax_configuration(&mut self, config: &TaxConfiguration) -> TaxResult<()>;

    /// Get the tax configuration of an organization, if it has one
    async fn get_tax_configuration(
        &self,
        organization_id: Uuid,
    ) -> TaxResult<Option<TaxConfiguration>>;
}

/// Hook for rejecting amounts before they reach the calculators
///
/// The calculators accept any decimal, negative values included. Whether a deployment
/// rejects them is decided here.
pub trait AmountValidator: Send + Sync {
    /// Validate a parsed invoice line
    fn validate_line_item(&self, line: &LineItem) -> TaxResult<()>;

    /// Validate a gross payment amount
    fn validate_payment(&self, gross_payment: &BigDecimal) -> TaxResult<()>;
}

/// Validator that accepts every amount
pub struct DefaultAmountValidator;

impl AmountValidator for DefaultAmountValidator {
    fn validate_line_item(&self, _line: &LineItem) -> TaxResult<()> {
        Ok(())
    }

    fn validate_payment(&self, _gross_payment: &BigDecimal) -> TaxResult<()> {
        Ok(())
    }
}
