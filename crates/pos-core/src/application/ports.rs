//! Application ports (traits) for the kata's collaborators.
//!
//! In hexagonal architecture, ports define what the application needs from
//! the outside world without tying it to any concrete infrastructure.
//! Adapters in `pos-adapters` implement these traits.
//!
//! ## Port Types
//!
//! - **Driven (output) ports**: called by the controller, implemented by
//!   infrastructure ([`Catalog`], [`SaleView`])
//! - **Driving (input) ports**: how the outside world reaches the
//!   application; a [`BarcodeSource`] raises scans into every registered
//!   [`ScanHandler`]
//!
//! ## Testing
//!
//! Ports use `mockall` under `#[cfg(test)]`, so controller tests can verify
//! the one-display-call-per-scan contract without real infrastructure.

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::ScanEvent;

/// Port for price lookups.
///
/// Implemented by:
/// - `pos_adapters::InMemoryCatalog` (production and tests)
///
/// Both queries are pure and infallible. A catalog built from an absent
/// mapping behaves as an empty one: `contains_barcode` answers `false` for
/// every key, never an error.
#[cfg_attr(test, automock)]
pub trait Catalog: Send + Sync {
    /// `true` iff an entry exists for exactly this string key.
    fn contains_barcode(&self, barcode: &str) -> bool;

    /// The price display string for `barcode`, if an entry exists.
    ///
    /// Callers are expected to guard with [`Catalog::contains_barcode`]
    /// first; the `Option` keeps the unguarded path total anyway.
    fn find_price(&self, barcode: &str) -> Option<String>;
}

/// Port for the sale display.
///
/// Implemented by:
/// - `pos_adapters::ConsoleView` (production)
/// - `pos_adapters::RecordingView` (capture for tests and structured output)
///
/// The three operations are mutually exclusive terminal actions for one
/// scan. None of them can fail; a sink that loses a line is the adapter's
/// problem, not the controller's.
#[cfg_attr(test, automock)]
pub trait SaleView: Send + Sync {
    /// Show the price string verbatim, with no reformatting.
    fn display_price(&self, price: &str);

    /// Show `Product code <barcode> not found`.
    fn display_product_not_found(&self, barcode: &str);

    /// Show `No barcode was provided`.
    fn display_no_barcode_provided(&self);
}

/// Receiver side of the scan notification stream.
///
/// Implemented by:
/// - [`SaleController`](crate::application::SaleController)
/// - `pos_core::steps::monolith::Pos` and friends, for the earlier cuts
#[cfg_attr(test, automock)]
pub trait ScanHandler: Send + Sync {
    /// Handle one scan, synchronously, before the source regains control.
    fn handle_scan(&self, event: &ScanEvent);
}

/// Registration side of the scan notification stream.
///
/// Implemented by:
/// - `pos_adapters::ManualScanner` (CLI, tests)
///
/// A source delivers each raised scan to every registered handler, in
/// registration order, on the raising thread. There is no unsubscribe: a
/// registration lasts for the source's lifetime.
pub trait BarcodeSource {
    /// Register a handler to be invoked once per raised scan.
    fn subscribe(&self, handler: Arc<dyn ScanHandler>);
}
