//! Application layer for the point-of-sale kata.
//!
//! This layer contains:
//! - **Controller**: use-case orchestration ([`SaleController`])
//! - **Ports**: trait seams for the injected collaborators
//!
//! The whole scan flow is synchronous and single-threaded: a source raises
//! a scan, the controller classifies it, the view shows one line, control
//! returns to the source.

pub mod controller;
pub mod ports;

pub use controller::SaleController;
pub use ports::{BarcodeSource, Catalog, SaleView, ScanHandler};
