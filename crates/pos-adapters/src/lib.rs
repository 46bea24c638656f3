//! Infrastructure adapters for the point-of-sale kata.
//!
//! This crate implements the ports defined in `pos_core::application::ports`.
//! It contains all external dependencies and I/O operations: catalog
//! storage and loading, display sinks, and the scanner feed.
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use pos_adapters::{ConsoleView, ManualScanner, builtin_catalog};
//! use pos_core::application::SaleController;
//!
//! let scanner = ManualScanner::new();
//! let _controller = SaleController::attach(
//!     &scanner,
//!     Box::new(builtin_catalog()),
//!     Box::new(ConsoleView::new()),
//! );
//!
//! scanner.scan("123"); // one line on stdout: $9.50
//! ```

pub mod builtin_catalog;
pub mod catalog;
pub mod catalog_loader;
pub mod scanner;
pub mod view;

// Re-export commonly used adapters
pub use builtin_catalog::builtin_catalog;
pub use catalog::InMemoryCatalog;
pub use catalog_loader::load_catalog;
pub use scanner::ManualScanner;
pub use view::{ConsoleView, DisplayCall, RecordingView};
