//! Catalog file loading.
//!
//! Catalogs live in single files, parsed by extension. Two formats are
//! understood:
//!
//! ## TOML (`.toml`)
//!
//! ```toml
//! [[entry]]
//! barcode = "123"
//! price = "$9.50"
//!
//! [[entry]]
//! barcode = "321"
//! price = "$12.75"
//! ```
//!
//! ## JSON (`.json`)
//!
//! ```json
//! [
//!   { "barcode": "123", "price": "$9.50" },
//!   { "barcode": "321", "price": "$12.75" }
//! ]
//! ```
//!
//! Entries are validated on load. An empty barcode, an empty price, or a
//! duplicate barcode rejects the whole file; a file with no entries loads
//! as an empty catalog.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use pos_core::domain::PriceEntry;
use pos_core::error::{PosError, PosResult};

use crate::catalog::InMemoryCatalog;

/// Raw entry as it sits in a catalog file, before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    barcode: String,
    price: String,
}

/// TOML document shape: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
}

/// Load a catalog from `path`, picking the parser by file extension.
///
/// # Errors
///
/// - [`PosError::UnsupportedFormat`] for extensions other than `.toml`
///   and `.json`
/// - [`PosError::CatalogNotFound`] when the file does not exist
/// - [`PosError::CatalogSource`] for unreadable or unparseable files
/// - [`PosError::Domain`] when an entry breaks a catalog invariant
#[instrument]
pub fn load_catalog(path: &Path) -> PosResult<InMemoryCatalog> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    // Reject the format before touching the filesystem, so a typo'd
    // extension is reported even when the path does not exist either.
    if extension != "toml" && extension != "json" {
        return Err(PosError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }

    let raw = read_source(path)?;

    let raw_entries = match extension.as_str() {
        "toml" => parse_toml(path, &raw)?,
        _ => parse_json(path, &raw)?,
    };

    debug!(path = %path.display(), entries = raw_entries.len(), "parsed catalog file");

    let entries = raw_entries
        .into_iter()
        .map(|raw| PriceEntry::new(raw.barcode, raw.price))
        .collect::<Result<Vec<_>, _>>()?;

    InMemoryCatalog::new(entries)
}

fn read_source(path: &Path) -> PosResult<String> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            PosError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PosError::CatalogSource {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        }
    })
}

fn parse_toml(path: &Path, raw: &str) -> PosResult<Vec<RawEntry>> {
    let doc: TomlCatalog = toml::from_str(raw).map_err(|err| PosError::CatalogSource {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Ok(doc.entries)
}

fn parse_json(path: &Path, raw: &str) -> PosResult<Vec<RawEntry>> {
    serde_json::from_str(raw).map_err(|err| PosError::CatalogSource {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pos_core::application::ports::Catalog;

    use super::*;

    fn write_catalog(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_toml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "catalog.toml",
            r#"
[[entry]]
barcode = "123"
price = "$9.50"

[[entry]]
barcode = "321"
price = "$12.75"
"#,
        );

        let catalog = load_catalog(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_price("123"), Some("$9.50".to_string()));
    }

    #[test]
    fn loads_a_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "catalog.json",
            r#"[
  { "barcode": "123", "price": "$9.50" },
  { "barcode": "321", "price": "$12.75" }
]"#,
        );

        let catalog = load_catalog(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_price("321"), Some("$12.75".to_string()));
    }

    #[test]
    fn empty_toml_file_is_an_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "catalog.toml", "");

        let catalog = load_catalog(&path).unwrap();

        assert!(catalog.is_empty());
        assert!(!catalog.contains_barcode("123"));
    }

    #[test]
    fn missing_file_is_catalog_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_catalog(&path).unwrap_err();

        assert!(matches!(err, PosError::CatalogNotFound { .. }));
    }

    #[test]
    fn malformed_toml_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "broken.toml", "[[entry]\nbarcode = ");

        let err = load_catalog(&path).unwrap_err();

        assert!(matches!(err, PosError::CatalogSource { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let err = load_catalog(Path::new("catalog.yaml")).unwrap_err();

        assert!(matches!(
            err,
            PosError::UnsupportedFormat { ref extension, .. } if extension == "yaml"
        ));
    }

    #[test]
    fn extension_matching_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "CATALOG.TOML", "[[entry]]\nbarcode = \"1\"\nprice = \"$1\"");

        assert!(load_catalog(&path).is_ok());
    }

    #[test]
    fn duplicate_barcodes_reject_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "dup.toml",
            r#"
[[entry]]
barcode = "123"
price = "$9.50"

[[entry]]
barcode = "123"
price = "$1.00"
"#,
        );

        let err = load_catalog(&path).unwrap_err();

        assert!(matches!(err, PosError::Domain(_)));
    }

    #[test]
    fn empty_price_rejects_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "blank.json",
            r#"[ { "barcode": "123", "price": "" } ]"#,
        );

        let err = load_catalog(&path).unwrap_err();

        assert!(matches!(err, PosError::Domain(_)));
    }
}
