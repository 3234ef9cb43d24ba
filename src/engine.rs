//! Tax engine that ties storage, boundary parsing and the calculators together

use tracing::warn;
use uuid::Uuid;

use crate::tax::gst::{GstCalculator, GstLineResult};
use crate::tax::tds::{TdsCalculator, TdsResult};
use crate::traits::*;
use crate::types::*;
use crate::utils::parsing::{RawLineItem, RawPayment};

/// Entry point for callers that work with organizations rather than raw rates
///
/// Each call parses its input, runs the configured validator, fetches a configuration
/// snapshot from storage and hands it to a pure calculator.
pub struct TaxEngine<S: TaxConfigurationStore> {
    storage: S,
    validator: Box<dyn AmountValidator>,
    gst: GstCalculator,
}

impl<S: TaxConfigurationStore> TaxEngine<S> {
    /// Create an engine that accepts every well-formed amount
    pub fn new(storage: S) -> Self {
        Self::with_validator(storage, Box::new(DefaultAmountValidator))
    }

    /// Create an engine with a custom boundary validator
    pub fn with_validator(storage: S, validator: Box<dyn AmountValidator>) -> Self {
        Self {
            storage,
            validator,
            gst: GstCalculator::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    async fn organization(&self, organization_id: Uuid) -> TaxResult<Organization> {
        self.storage
            .get_organization(organization_id)
            .await?
            .ok_or_else(|| TaxError::OrganizationNotFound(organization_id.to_string()))
    }

    /// Calculate GST for one line sold by the organization to a buyer in `buyer_state`
    pub async fn calculate_line_item_gst(
        &self,
        organization_id: Uuid,
        raw: &RawLineItem,
        buyer_state: Option<&str>,
    ) -> TaxResult<GstLineResult> {
        let line = raw.parse()?;
        if let Err(e) = self.validator.validate_line_item(&line) {
            warn!(%organization_id, error = %e, "rejected line item");
            return Err(e);
        }

        let organization = self.organization(organization_id).await?;
        Ok(self
            .gst
            .calculate_for_organization(&line, &organization, buyer_state))
    }

    /// Calculate TDS on a payment made by the organization
    ///
    /// An organization without a tax configuration withholds nothing.
    pub async fn calculate_tds(
        &self,
        organization_id: Uuid,
        raw: &RawPayment,
        nature: &str,
    ) -> TaxResult<TdsResult> {
        let gross_payment = raw.parse()?;
        if let Err(e) = self.validator.validate_payment(&gross_payment) {
            warn!(%organization_id, error = %e, "rejected payment");
            return Err(e);
        }

        self.organization(organization_id).await?;
        let config = self.storage.get_tax_configuration(organization_id).await?;
        Ok(TdsCalculator::new(config).calculate(&gross_payment, nature))
    }
}
