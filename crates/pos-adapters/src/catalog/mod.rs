//! Catalog adapters.
//!
//! One implementation covers both production and tests: catalogs in this
//! kata are small, fixed at construction, and queried read-only, so a plain
//! in-memory map is the whole story. File-backed catalogs go through
//! [`crate::catalog_loader`], which parses into the same type.

pub mod memory;

pub use memory::InMemoryCatalog;
