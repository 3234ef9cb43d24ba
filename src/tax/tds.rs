//! TDS (Tax Deducted at Source) withholding on payments

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tax::rounding::round2;
use crate::types::TaxConfiguration;

/// Payment categories that carry a withholding rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TdsNature {
    /// Payments to contractors and sub-contractors
    Contractor,
}

impl TdsNature {
    pub const ALL: [TdsNature; 1] = [TdsNature::Contractor];

    /// Upper-case keyword searched for in free-text payment descriptions
    pub fn keyword(&self) -> &'static str {
        match self {
            TdsNature::Contractor => "CONTRACTOR",
        }
    }

    /// Classify a free-text nature such as "Contractor Payment"
    ///
    /// Matching is a case-insensitive substring test against each keyword.
    pub fn classify(nature: &str) -> Option<TdsNature> {
        let upper = nature.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| upper.contains(candidate.keyword()))
    }
}

/// Where the withholding rate of a calculation came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TdsRateSource {
    /// Rate taken from the organization's configuration
    Configured(TdsNature),
    /// Nature matched a category the configuration has no rate for
    UnconfiguredNature(TdsNature),
    /// Nature text matched no known category
    UnmatchedNature,
    /// The organization has no tax configuration at all
    NoConfiguration,
}

/// Withholding computed for one payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TdsResult {
    pub tds_amount: BigDecimal,
    pub net_payment: BigDecimal,
    /// Percentage that was applied
    pub rate: BigDecimal,
    pub rate_source: TdsRateSource,
}

/// TDS calculator bound to a read-only configuration snapshot
///
/// A missing configuration is not an error: every payment then withholds nothing.
#[derive(Debug, Clone, Default)]
pub struct TdsCalculator {
    config: Option<TaxConfiguration>,
}

impl TdsCalculator {
    pub fn new(config: Option<TaxConfiguration>) -> Self {
        Self { config }
    }

    /// Calculator for an organization whose configuration is known
    pub fn with_configuration(config: TaxConfiguration) -> Self {
        Self::new(Some(config))
    }

    pub fn configuration(&self) -> Option<&TaxConfiguration> {
        self.config.as_ref()
    }

    /// Resolve the withholding percentage for a payment nature
    pub fn resolve_rate(&self, nature: &str) -> (BigDecimal, TdsRateSource) {
        let Some(config) = &self.config else {
            debug!(nature, "no tax configuration, withholding nothing");
            return (BigDecimal::from(0), TdsRateSource::NoConfiguration);
        };

        let Some(category) = TdsNature::classify(nature) else {
            debug!(nature, "payment nature matched no tds category");
            return (BigDecimal::from(0), TdsRateSource::UnmatchedNature);
        };

        match config.tds_rate(category) {
            Some(rate) => (rate.clone(), TdsRateSource::Configured(category)),
            None => {
                debug!(nature, ?category, "no tds rate configured for category");
                (
                    BigDecimal::from(0),
                    TdsRateSource::UnconfiguredNature(category),
                )
            }
        }
    }

    /// Calculate the amount to withhold from a gross payment and the net payable
    pub fn calculate(&self, gross_payment: &BigDecimal, nature: &str) -> TdsResult {
        let (rate, rate_source) = self.resolve_rate(nature);
        let tds_amount = round2(&(gross_payment * &rate / &BigDecimal::from(100)));
        let net_payment = round2(&(gross_payment - &tds_amount));

        debug!(
            gross_payment = %gross_payment,
            rate = %rate,
            tds_amount = %tds_amount,
            net_payment = %net_payment,
            "calculated tds"
        );

        TdsResult {
            tds_amount,
            net_payment,
            rate,
            rate_source,
        }
    }
}
