//! Unified error handling for the kata core.
//!
//! These errors cover catalog construction and loading only. The scan path
//! itself is total: empty payloads, unknown codes, and absent mappings all
//! resolve into display messages, never into a `PosError`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for fallible core and adapter operations.
#[derive(Debug, Error, Clone)]
pub enum PosError {
    /// Catalog data violated a domain invariant.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The requested catalog file does not exist.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A catalog file exists but could not be read or parsed.
    #[error("Failed to load catalog '{path}': {reason}")]
    CatalogSource {
        /// Path of the offending file.
        path: PathBuf,
        /// Readable cause (I/O or parse detail).
        reason: String,
    },

    /// A catalog file uses an extension the loaders do not understand.
    #[error("Unsupported catalog format '{extension}' for {path}")]
    UnsupportedFormat {
        /// Path of the offending file.
        path: PathBuf,
        /// The extension that was not recognized.
        extension: String,
    },
}

impl PosError {
    /// Get user-actionable suggestions for resolving this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(domain) => domain.suggestions(),
            Self::CatalogNotFound { path } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "Run 'pos init' to create a starter catalog".to_string(),
                "Run 'pos catalog path' to see where catalogs are looked up".to_string(),
            ],
            Self::CatalogSource { .. } => vec![
                "Fix the reported line in the catalog file".to_string(),
                "TOML catalogs hold [[entry]] tables with 'barcode' and 'price' keys".to_string(),
                "JSON catalogs hold an array of {\"barcode\", \"price\"} objects".to_string(),
            ],
            Self::UnsupportedFormat { extension, .. } => vec![
                format!("'{extension}' is not a catalog format"),
                "Use a '.toml' or '.json' catalog file".to_string(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::CatalogNotFound { .. } => ErrorCategory::NotFound,
            Self::CatalogSource { .. } | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

/// Error categories used for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input data broke a domain rule.
    Validation,
    /// Something that was asked for does not exist.
    NotFound,
    /// Files or settings on the user's machine are wrong.
    Configuration,
    /// A bug or an unexpected condition.
    Internal,
}

/// Convenient result type alias used across the kata crates.
pub type PosResult<T> = Result<T, PosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category_and_suggestions() {
        let err = PosError::from(DomainError::EmptyBarcode);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_catalog_is_not_found() {
        let err = PosError::CatalogNotFound {
            path: PathBuf::from("/tmp/missing.toml"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn malformed_catalog_is_a_configuration_problem() {
        let err = PosError::CatalogSource {
            path: PathBuf::from("catalog.toml"),
            reason: "expected a table".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
