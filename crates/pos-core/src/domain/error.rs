//! Domain-specific error types.
//!
//! Everything here is a construction-time violation of the catalog data
//! model. Nothing in this module can occur while a scan is being handled:
//! scan-time conditions (empty payload, unknown code) resolve into display
//! messages, not errors.

use thiserror::Error;

/// Errors that can occur while building catalog entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price entry was given an empty barcode.
    #[error("Price entry has an empty barcode")]
    EmptyBarcode,

    /// A price entry was given an empty price string.
    #[error("Price entry for barcode '{barcode}' has an empty price")]
    EmptyPrice {
        /// The barcode whose price was missing.
        barcode: String,
    },

    /// Two entries in one catalog claim the same barcode.
    #[error("Duplicate barcode in catalog: '{barcode}'")]
    DuplicateBarcode {
        /// The barcode that appeared more than once.
        barcode: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for resolving this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyBarcode => vec![
                "Every catalog entry needs a non-empty barcode".to_string(),
                "Remove the entry or fill in its barcode".to_string(),
            ],
            Self::EmptyPrice { barcode } => vec![
                format!("Give '{barcode}' a display price such as \"$9.50\""),
                "Prices are opaque strings; any non-empty text is accepted".to_string(),
            ],
            Self::DuplicateBarcode { barcode } => vec![
                format!("Keep only one entry for '{barcode}'"),
                "Barcodes are matched exactly, so near-duplicates are distinct".to_string(),
            ],
        }
    }
}
