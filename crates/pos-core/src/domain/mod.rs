//! Core domain layer for the point-of-sale kata.
//!
//! Pure vocabulary with zero I/O: scan events as raised by a barcode
//! source, and validated price entries as stored by a catalog. Everything
//! observable (catalog storage, display sinks, scanner feeds) lives behind
//! the ports in [`crate::application`].

pub mod error;
pub mod price;
pub mod scan;

pub use error::DomainError;
pub use price::PriceEntry;
pub use scan::ScanEvent;
