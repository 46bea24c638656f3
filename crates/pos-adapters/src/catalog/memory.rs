//! In-memory catalog implementation.

use std::collections::HashMap;

use pos_core::application::ports::Catalog;
use pos_core::domain::{DomainError, PriceEntry};
use pos_core::error::PosResult;

/// Catalog backed by a plain map, fixed at construction.
///
/// Queries are pure: nothing mutates after the constructor returns, so the
/// map needs no locking and the type can be cloned freely.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    prices: HashMap<String, String>,
}

impl InMemoryCatalog {
    /// Build a catalog from validated entries.
    ///
    /// # Errors
    ///
    /// [`DomainError::DuplicateBarcode`] if two entries share a barcode.
    pub fn new(entries: Vec<PriceEntry>) -> PosResult<Self> {
        let mut prices = HashMap::with_capacity(entries.len());

        for entry in entries {
            let (barcode, price) = entry.into_parts();
            if prices.insert(barcode.clone(), price).is_some() {
                return Err(DomainError::DuplicateBarcode { barcode }.into());
            }
        }

        Ok(Self { prices })
    }

    /// Catalog with no entries; every lookup answers not-found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from an optional raw barcode→price mapping.
    ///
    /// An absent mapping is a valid configuration meaning "no products
    /// registered" and produces the same catalog as [`Self::empty`], never
    /// an error. Pairs of a present mapping are validated like any other
    /// entries.
    pub fn from_mapping(mapping: Option<HashMap<String, String>>) -> PosResult<Self> {
        let Some(mapping) = mapping else {
            return Ok(Self::empty());
        };

        let entries = mapping
            .into_iter()
            .map(|(barcode, price)| PriceEntry::new(barcode, price))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// All entries, sorted by barcode for stable listings.
    pub fn entries(&self) -> Vec<PriceEntry> {
        let mut entries: Vec<PriceEntry> = self
            .prices
            .iter()
            .map(|(barcode, price)| {
                // Stored pairs already passed entry validation.
                PriceEntry::new(barcode.clone(), price.clone())
                    .expect("catalog entries validated at construction")
            })
            .collect();

        entries.sort_by(|a, b| a.barcode().cmp(b.barcode()));
        entries
    }
}

impl Catalog for InMemoryCatalog {
    fn contains_barcode(&self, barcode: &str) -> bool {
        self.prices.contains_key(barcode)
    }

    fn find_price(&self, barcode: &str) -> Option<String> {
        self.prices.get(barcode).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(barcode: &str, price: &str) -> PriceEntry {
        PriceEntry::new(barcode, price).unwrap()
    }

    #[test]
    fn lookups_hit_the_stored_entries() {
        let catalog =
            InMemoryCatalog::new(vec![entry("123", "$9.50"), entry("321", "$12.75")]).unwrap();

        assert!(catalog.contains_barcode("123"));
        assert_eq!(catalog.find_price("123"), Some("$9.50".to_string()));
        assert_eq!(catalog.find_price("321"), Some("$12.75".to_string()));
    }

    #[test]
    fn unknown_barcode_misses_without_error() {
        let catalog = InMemoryCatalog::new(vec![entry("123", "$9.50")]).unwrap();

        assert!(!catalog.contains_barcode("99999"));
        assert_eq!(catalog.find_price("99999"), None);
    }

    #[test]
    fn lookup_is_exact_no_trimming_or_case_folding() {
        let catalog = InMemoryCatalog::new(vec![entry("AbC", "$1.00")]).unwrap();

        assert!(catalog.contains_barcode("AbC"));
        assert!(!catalog.contains_barcode("abc"));
        assert!(!catalog.contains_barcode(" AbC"));
        assert!(!catalog.contains_barcode("AbC "));
    }

    #[test]
    fn duplicate_barcodes_reject_construction() {
        let err =
            InMemoryCatalog::new(vec![entry("123", "$9.50"), entry("123", "$1.00")]).unwrap_err();

        assert!(err.to_string().contains("123"));
    }

    #[test]
    fn absent_mapping_is_an_empty_catalog_not_a_fault() {
        let catalog = InMemoryCatalog::from_mapping(None).unwrap();

        assert!(catalog.is_empty());
        assert!(!catalog.contains_barcode("123"));
        assert_eq!(catalog.find_price("123"), None);
    }

    #[test]
    fn present_mapping_becomes_a_catalog() {
        let mapping = HashMap::from([
            ("123".to_string(), "$9.50".to_string()),
            ("321".to_string(), "$12.75".to_string()),
        ]);

        let catalog = InMemoryCatalog::from_mapping(Some(mapping)).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_price("321"), Some("$12.75".to_string()));
    }

    #[test]
    fn mapping_pairs_are_validated_like_entries() {
        let mapping = HashMap::from([("123".to_string(), String::new())]);

        assert!(InMemoryCatalog::from_mapping(Some(mapping)).is_err());
    }

    #[test]
    fn entries_come_back_sorted_by_barcode() {
        let catalog = InMemoryCatalog::new(vec![
            entry("321", "$12.75"),
            entry("123", "$9.50"),
            entry("200", "$5.00"),
        ])
        .unwrap();

        let entries = catalog.entries();
        let barcodes: Vec<&str> = entries.iter().map(|e| e.barcode()).collect();
        // Sorted copy only; iteration order of the backing map leaks nowhere.
        assert_eq!(barcodes, vec!["123", "200", "321"]);
    }
}
