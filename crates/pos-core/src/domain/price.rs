//! Price entries, the catalog's unit of data.

use serde::Serialize;

use super::error::DomainError;

/// One validated barcode-to-price association.
///
/// The price is an opaque, pre-formatted display string (`"$9.50"`,
/// `"7,95 €"`). Nothing in the system parses it, computes with it, or
/// checks it for currency shape; it only has to be non-empty so the display
/// never emits a blank line for a priced product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEntry {
    barcode: String,
    price: String,
}

impl PriceEntry {
    /// Create a validated entry.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyBarcode`] if the barcode is empty
    /// - [`DomainError::EmptyPrice`] if the price is empty
    pub fn new(barcode: impl Into<String>, price: impl Into<String>) -> Result<Self, DomainError> {
        let barcode = barcode.into();
        let price = price.into();

        if barcode.is_empty() {
            return Err(DomainError::EmptyBarcode);
        }
        if price.is_empty() {
            return Err(DomainError::EmptyPrice { barcode });
        }

        Ok(Self { barcode, price })
    }

    /// The exact lookup key for this entry.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// The display string shown when this entry is scanned.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// Split the entry into its `(barcode, price)` parts.
    pub fn into_parts(self) -> (String, String) {
        (self.barcode, self.price)
    }
}
