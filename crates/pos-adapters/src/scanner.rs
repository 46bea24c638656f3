//! Scanner feed adapter.

use std::sync::{Arc, Mutex};

use tracing::trace;

use pos_core::application::ports::{BarcodeSource, ScanHandler};
use pos_core::domain::ScanEvent;

/// Hand-driven scan feed.
///
/// Stands in for scanner hardware: whoever holds the scanner raises scans
/// by calling [`ManualScanner::scan`], and every subscribed handler runs
/// synchronously on that thread before `scan` returns. Handlers are
/// invoked in registration order and there is no unsubscribe.
#[derive(Default)]
pub struct ManualScanner {
    handlers: Mutex<Vec<Arc<dyn ScanHandler>>>,
}

impl ManualScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise one scan carrying `code`.
    pub fn scan(&self, code: &str) {
        self.dispatch(&ScanEvent::new(code));
    }

    /// Raise an already-built scan event.
    pub fn dispatch(&self, event: &ScanEvent) {
        let handlers = self.handlers.lock().expect("scan handler list poisoned");
        trace!(
            code = event.code(),
            handlers = handlers.len(),
            "raising scan"
        );
        for handler in handlers.iter() {
            handler.handle_scan(event);
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().expect("scan handler list poisoned").len()
    }
}

impl BarcodeSource for ManualScanner {
    fn subscribe(&self, handler: Arc<dyn ScanHandler>) {
        self.handlers
            .lock()
            .expect("scan handler list poisoned")
            .push(handler);
    }
}
