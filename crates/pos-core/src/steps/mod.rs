//! The kata's refactoring history, kept as runnable steps.
//!
//! The point of the exercise is the progression, not the destination, so
//! the two earlier cuts stay in the tree alongside the final one:
//!
//! 1. [`monolith`]: one object glued to the scan feed, one hard-coded
//!    price line
//! 2. [`price_table`]: a controller that owns its barcode→price map and
//!    formats its own messages
//! 3. the crate itself: controller + injected catalog + injected view
//!    ([`crate::application`]), where the empty-scan branch and the
//!    absent-mapping rule arrive
//!
//! All three subscribe to the same [`BarcodeSource`] port; the event
//! wiring predates the collaborator split and never changes shape.
//!
//! [`BarcodeSource`]: crate::application::ports::BarcodeSource

pub mod monolith;
pub mod price_table;

/// Plain line sink used by the first two steps, before the display grew
/// into a view of its own.
pub trait LineOutput: Send + Sync {
    /// Write one display line.
    fn write_line(&self, line: &str);
}
