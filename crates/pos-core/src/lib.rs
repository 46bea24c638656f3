//! Pos Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! point-of-sale barcode kata, following hexagonal (ports and adapters)
//! architecture.
//!
//! The flow under study is deliberately small: scan a barcode, display the
//! price. The interesting part is how the pieces are allowed to talk to
//! each other, and the repo keeps every cut of that conversation (see
//! [`steps`]).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pos-cli (CLI)                │
//! │      (Drives the scan sources)          │
//! └──────────────────┬──────────────────────┘
//!                    │ raises scans
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    BarcodeSource → ScanHandler          │
//! │  (one synchronous callback per scan)    │
//! └──────────────────┬──────────────────────┘
//!                    │ handled by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          SaleController                 │
//! │   (three branches, one display call)    │
//! └──────────────────┬──────────────────────┘
//!                    │ speaks through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │     (Driven: Catalog, SaleView)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pos-adapters (Infrastructure)        │
//! │ (InMemoryCatalog, ConsoleView, scanner) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pos_core::prelude::*;
//!
//! // Adapters implement the ports; `pos-adapters` ships the real ones.
//! # struct Stub;
//! # impl Catalog for Stub {
//! #     fn contains_barcode(&self, _: &str) -> bool { false }
//! #     fn find_price(&self, _: &str) -> Option<String> { None }
//! # }
//! # impl SaleView for Stub {
//! #     fn display_price(&self, _: &str) {}
//! #     fn display_product_not_found(&self, _: &str) {}
//! #     fn display_no_barcode_provided(&self) {}
//! # }
//! # let (catalog, view) = (Box::new(Stub), Box::new(Stub));
//! // 1. Build the controller with injected collaborators
//! let controller = SaleController::new(catalog, view);
//!
//! // 2. Drive it: one scan in, exactly one display call out
//! controller.handle_scan(&ScanEvent::new("123"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (controller and ports)
pub mod application;

// Re-export error types
pub mod error;

// The kata's earlier cuts, kept runnable
pub mod steps;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SaleController,
        ports::{BarcodeSource, Catalog, SaleView, ScanHandler},
    };
    pub use crate::domain::{DomainError, PriceEntry, ScanEvent};
    pub use crate::error::{PosError, PosResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
