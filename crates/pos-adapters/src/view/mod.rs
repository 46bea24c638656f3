//! Sale view adapters.
//!
//! Two implementations of `pos_core::application::ports::SaleView`:
//!
//! - [`ConsoleView`]: prints each display call as one stdout line
//! - [`RecordingView`]: captures display calls for tests and for
//!   structured (JSON) output
//!
//! Both render the same wording; the message text lives in [`messages`] so
//! the two can never drift apart.

pub mod console;
pub mod recording;

pub use console::ConsoleView;
pub use recording::{DisplayCall, RecordingView};

/// Canonical message wording shared by every view implementation.
pub mod messages {
    /// Line shown when a scan carried no barcode at all.
    pub const NO_BARCODE: &str = "No barcode was provided";

    /// Line shown when a scanned code has no catalog entry.
    pub fn product_not_found(barcode: &str) -> String {
        format!("Product code {barcode} not found")
    }
}

#[cfg(test)]
mod tests {
    use super::messages;

    #[test]
    fn not_found_wording_embeds_the_code_verbatim() {
        assert_eq!(
            messages::product_not_found("99999"),
            "Product code 99999 not found"
        );
        // Odd codes are embedded as scanned, untouched.
        assert_eq!(
            messages::product_not_found("  a b  "),
            "Product code   a b   not found"
        );
    }
}
