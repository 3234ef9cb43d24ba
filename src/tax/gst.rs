//! GST (Goods and Services Tax) line-item calculation for Indian tax compliance

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tax::rounding::{round2, zero_amount};
use crate::types::{Organization, TaxConfiguration};
use crate::utils::parsing::exact_decimal;

/// Standard GST slabs for goods and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstCategory {
    /// Exempt and nil-rated supplies - 0%
    Nil,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Higher rate items - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstCategory {
    pub const ALL: [GstCategory; 5] = [
        GstCategory::Nil,
        GstCategory::Reduced,
        GstCategory::Standard,
        GstCategory::Higher,
        GstCategory::Luxury,
    ];

    /// Statutory rate for this slab, used when an organization has not overridden it
    pub fn statutory_rate(&self) -> BigDecimal {
        match self {
            GstCategory::Nil => BigDecimal::from(0),
            GstCategory::Reduced => BigDecimal::from(5),
            GstCategory::Standard => BigDecimal::from(12),
            GstCategory::Higher => BigDecimal::from(18),
            GstCategory::Luxury => BigDecimal::from(28),
        }
    }
}

/// One invoice row as seen by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub quantity: BigDecimal,
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub unit_price: BigDecimal,
    /// GST rate as a percentage (18 for 18%)
    #[serde(deserialize_with = "exact_decimal::deserialize")]
    pub gst_rate: BigDecimal,
}

impl LineItem {
    pub fn new(quantity: BigDecimal, unit_price: BigDecimal, gst_rate: BigDecimal) -> Self {
        Self {
            quantity,
            unit_price,
            gst_rate,
        }
    }

    /// Build a line taxed at the organization's configured rate for a slab
    pub fn for_category(
        quantity: BigDecimal,
        unit_price: BigDecimal,
        category: GstCategory,
        config: &TaxConfiguration,
    ) -> Self {
        Self::new(quantity, unit_price, config.gst_rate(category))
    }

    /// Quantity times unit price, unrounded
    pub fn taxable_value(&self) -> BigDecimal {
        &self.quantity * &self.unit_price
    }
}

/// Tax computed for one line, every amount quantized to paise
///
/// Either the CGST/SGST pair or IGST is zero. `cgst_amount + sgst_amount + igst_amount`
/// equals `tax_amount`, except on intra-state lines whose tax has an odd paisa: each half
/// rounds up on its own, so the pair sums to one paisa more than `tax_amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstLineResult {
    pub tax_amount: BigDecimal,
    pub cgst_amount: BigDecimal,
    pub sgst_amount: BigDecimal,
    pub igst_amount: BigDecimal,
}

impl GstLineResult {
    /// Whether a non-zero CGST/SGST pair was charged
    ///
    /// False for a zero-tax line even when both parties are in the same state; use the
    /// free [`is_intra_state`] to classify the supply itself.
    pub fn is_intra_state(&self) -> bool {
        self.igst_amount == BigDecimal::from(0) && self.cgst_amount != BigDecimal::from(0)
    }
}

/// Whether a supply stays within one state
///
/// Both codes must be known and identical; anything else is treated as inter-state.
/// Codes are compared as given, so callers normalize them first.
pub fn is_intra_state(seller_state: Option<&str>, buyer_state: Option<&str>) -> bool {
    match (seller_state, buyer_state) {
        (Some(seller), Some(buyer)) => !seller.is_empty() && seller == buyer,
        _ => false,
    }
}

/// GST line-item calculator
///
/// Stateless; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GstCalculator;

impl GstCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the GST on one line and split it by jurisdiction
    pub fn calculate(
        &self,
        line: &LineItem,
        seller_state: Option<&str>,
        buyer_state: Option<&str>,
    ) -> GstLineResult {
        let taxable_value = line.taxable_value();
        let tax_amount = round2(&(&taxable_value * &line.gst_rate / &BigDecimal::from(100)));

        let result = if is_intra_state(seller_state, buyer_state) {
            let half = round2(&(&tax_amount / &BigDecimal::from(2)));
            // An odd-paisa tax leaves cgst + sgst one paisa above tax_amount.
            GstLineResult {
                tax_amount,
                cgst_amount: half.clone(),
                sgst_amount: half,
                igst_amount: zero_amount(),
            }
        } else {
            GstLineResult {
                tax_amount: tax_amount.clone(),
                cgst_amount: zero_amount(),
                sgst_amount: zero_amount(),
                igst_amount: tax_amount,
            }
        };

        debug!(
            taxable_value = %taxable_value,
            gst_rate = %line.gst_rate,
            seller_state = seller_state.unwrap_or(""),
            buyer_state = buyer_state.unwrap_or(""),
            tax_amount = %result.tax_amount,
            igst_amount = %result.igst_amount,
            "calculated line item gst"
        );

        result
    }

    /// Calculate with the organization's registered state as the seller state
    pub fn calculate_for_organization(
        &self,
        line: &LineItem,
        organization: &Organization,
        buyer_state: Option<&str>,
    ) -> GstLineResult {
        self.calculate(line, organization.state.as_deref(), buyer_state)
    }
}

/// Invoice line paired with its computed tax
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstInvoiceLine {
    pub line: LineItem,
    pub result: GstLineResult,
}

/// Invoice-level GST totals
///
/// CGST, SGST and IGST totals are sums of the rounded line components. `total_tax` sums
/// the lines' `tax_amount`, so it can trail `total_cgst + total_sgst` by one paisa per
/// odd-paisa intra-state line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstInvoice {
    pub lines: Vec<GstInvoiceLine>,
    pub total_taxable_value: BigDecimal,
    pub total_cgst: BigDecimal,
    pub total_sgst: BigDecimal,
    pub total_igst: BigDecimal,
    pub total_tax: BigDecimal,
    pub grand_total: BigDecimal,
}

impl GstInvoice {
    /// Calculate every line of an invoice for one seller/buyer pair
    pub fn calculate(
        calculator: &GstCalculator,
        lines: Vec<LineItem>,
        seller_state: Option<&str>,
        buyer_state: Option<&str>,
    ) -> Self {
        let lines = lines
            .into_iter()
            .map(|line| {
                let result = calculator.calculate(&line, seller_state, buyer_state);
                GstInvoiceLine { line, result }
            })
            .collect();
        Self::from_lines(lines)
    }

    /// Build the totals from lines that were already calculated
    pub fn from_lines(lines: Vec<GstInvoiceLine>) -> Self {
        let mut invoice = Self {
            lines,
            total_taxable_value: zero_amount(),
            total_cgst: zero_amount(),
            total_sgst: zero_amount(),
            total_igst: zero_amount(),
            total_tax: zero_amount(),
            grand_total: zero_amount(),
        };
        invoice.recalculate_totals();
        invoice
    }

    /// Add a calculated line and refresh the totals
    pub fn add_line(&mut self, line: GstInvoiceLine) {
        self.lines.push(line);
        self.recalculate_totals();
    }

    fn recalculate_totals(&mut self) {
        let mut taxable = BigDecimal::from(0);
        let mut total_cgst = zero_amount();
        let mut total_sgst = zero_amount();
        let mut total_igst = zero_amount();
        let mut total_tax = zero_amount();

        for line in &self.lines {
            taxable += line.line.taxable_value();
            total_cgst += &line.result.cgst_amount;
            total_sgst += &line.result.sgst_amount;
            total_igst += &line.result.igst_amount;
            total_tax += &line.result.tax_amount;
        }

        let total_taxable_value = round2(&taxable);

        self.grand_total = &total_taxable_value + &total_tax;
        self.total_taxable_value = total_taxable_value;
        self.total_cgst = total_cgst;
        self.total_sgst = total_sgst;
        self.total_igst = total_igst;
        self.total_tax = total_tax;
    }
}
