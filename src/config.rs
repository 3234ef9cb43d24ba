//! Loading tax configuration from YAML
//!
//! Rates are read as decimals, never floats. Integers may be written bare, but an unquoted
//! fractional rate such as `0.3` is a YAML float and is refused with
//! [`TaxError::ConfigParse`]. Quote fractional rates so they reach the decimal parser as
//! text:
//!
//! ```yaml
//! organization_id: 6f1c1b8e-2f43-4c59-9a43-6a0a5e0f3a11
//! gst_rates:
//!   Reduced: "5"
//!   Higher: "18"
//! tds_rates:
//!   Contractor: "1.5"
//! ```
//!
//! Slabs left out of `gst_rates` fall back to their statutory rate.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::types::{TaxConfiguration, TaxError, TaxResult};

/// Reads [`TaxConfiguration`] documents from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load one organization's configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> TaxResult<TaxConfiguration> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TaxError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => TaxError::ConfigParse {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        let config = parse_yaml(&content, &path_str)?;
        info!(
            path = %path_str,
            organization_id = %config.organization_id,
            "loaded tax configuration"
        );
        Ok(config)
    }
}

impl TaxConfiguration {
    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> TaxResult<Self> {
        parse_yaml(content, "<inline>")
    }
}

fn parse_yaml(content: &str, path: &str) -> TaxResult<TaxConfiguration> {
    let mut config: TaxConfiguration =
        serde_yaml::from_str(content).map_err(|e| TaxError::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    for category in crate::tax::gst::GstCategory::ALL {
        config
            .gst_rates
            .entry(category)
            .or_insert_with(|| category.statutory_rate());
    }

    Ok(config)
}
