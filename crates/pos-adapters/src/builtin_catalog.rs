//! Built-in demo catalog.
//!
//! Commands resolve the catalog they run against in this order:
//!
//! 1. `--catalog <path>` on the command line
//! 2. `catalog_path` in the config file (or `POS_CATALOG_PATH`)
//! 3. this built-in demo catalog
//!
//! The demo entries exist so `pos scan` works out of the box, with nothing
//! on disk:
//!
//! | Barcode | Price    |
//! |---------|----------|
//! | `123`   | `$9.50`  |
//! | `321`   | `$12.75` |
//! | `12345` | `$1.25`  |
//! | `54321` | `$0.99`  |

use pos_core::domain::PriceEntry;

use crate::catalog::InMemoryCatalog;

/// The demo entries as plain data.
pub fn builtin_entries() -> Vec<PriceEntry> {
    [
        ("123", "$9.50"),
        ("321", "$12.75"),
        ("12345", "$1.25"),
        ("54321", "$0.99"),
    ]
    .into_iter()
    .map(|(barcode, price)| {
        PriceEntry::new(barcode, price).expect("demo entries are statically valid")
    })
    .collect()
}

/// The demo catalog, ready to inject into a controller.
pub fn builtin_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(builtin_entries()).expect("demo entries have unique barcodes")
}
