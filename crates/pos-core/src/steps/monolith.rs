//! Step 1: the whole flow in one object.

use std::sync::Arc;

use crate::application::ports::{BarcodeSource, ScanHandler};
use crate::domain::ScanEvent;

use super::LineOutput;

/// The first cut: every scan prints the one price the shop charges for
/// anything.
///
/// No lookup, no validation. The object exists to prove the wiring: a scan
/// raised by the source comes out as a line on the sink, synchronously, on
/// the raising thread.
pub struct Pos {
    output: Box<dyn LineOutput>,
}

impl Pos {
    /// Wire a new `Pos` to `source`. The subscription lasts for the
    /// source's lifetime.
    pub fn attach(source: &dyn BarcodeSource, output: Box<dyn LineOutput>) -> Arc<Self> {
        let pos = Arc::new(Self { output });
        let handler: Arc<dyn ScanHandler> = pos.clone();
        source.subscribe(handler);
        pos
    }
}

impl ScanHandler for Pos {
    fn handle_scan(&self, _event: &ScanEvent) {
        self.output.write_line("$9.50");
    }
}
