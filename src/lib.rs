//! # BizBooks Tax
//!
//! Indian GST and TDS calculations for small-business accounting, with the statutory
//! rounding rules applied on exact decimals.
//!
//! ## Features
//!
//! - **GST line items**: taxable value and the CGST/SGST or IGST split for one invoice row
//! - **Invoice totals**: GST totals across many lines
//! - **TDS withholding**: amount withheld and net payable for a payment by its nature
//! - **Configuration**: per-organization slab and withholding rates, loadable from YAML
//! - **Storage abstraction**: configuration lookups behind an async trait
//!
//! ## Quick Start
//!
//! ```rust
//! use bizbooks_tax::{GstCalculator, LineItem};
//! use bigdecimal::BigDecimal;
//!
//! let line = LineItem::new(BigDecimal::from(10), BigDecimal::from(1000), BigDecimal::from(18));
//! let result = GstCalculator::new().calculate(&line, Some("KA"), Some("KA"));
//!
//! assert_eq!(result.cgst_amount.to_string(), "900.00");
//! assert_eq!(result.igst_amount.to_string(), "0.00");
//! ```

pub mod config;
pub mod engine;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ConfigLoader;
pub use engine::TaxEngine;
pub use tax::*;
pub use traits::*;
pub use types::*;
