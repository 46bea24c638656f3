//! Console view: one display call, one stdout line.

use std::io::{self, Write};

use tracing::warn;

use pos_core::application::ports::SaleView;

use super::messages;

/// View that prints each display call as a single line on stdout.
///
/// Display lines are the program's output proper, so they carry no styling
/// and go to stdout; diagnostics stay on the tracing layer. Write failures
/// are logged and swallowed: the display contract has no failure path, and
/// a lost line must not take the scan loop down with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{line}") {
            warn!(error = %err, line, "display line was lost");
        }
    }
}

impl SaleView for ConsoleView {
    fn display_price(&self, price: &str) {
        self.write_line(price);
    }

    fn display_product_not_found(&self, barcode: &str) {
        self.write_line(&messages::product_not_found(barcode));
    }

    fn display_no_barcode_provided(&self) {
        self.write_line(messages::NO_BARCODE);
    }
}
