//! Step 2: the price map moves into a controller.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{BarcodeSource, ScanHandler};
use crate::domain::ScanEvent;

use super::LineOutput;

/// The second cut: a controller that owns its barcode→price map and still
/// formats its own messages.
///
/// Lookup and the not-found message arrive here. Empty-scan handling and
/// the catalog/view split belong to the next cut,
/// [`crate::application::SaleController`].
pub struct SaleController {
    prices: HashMap<String, String>,
    output: Box<dyn LineOutput>,
}

impl SaleController {
    /// Wire a new controller to `source` with a literal price map.
    pub fn attach(
        source: &dyn BarcodeSource,
        prices: HashMap<String, String>,
        output: Box<dyn LineOutput>,
    ) -> Arc<Self> {
        let controller = Arc::new(Self { prices, output });
        let handler: Arc<dyn ScanHandler> = controller.clone();
        source.subscribe(handler);
        controller
    }
}

impl ScanHandler for SaleController {
    fn handle_scan(&self, event: &ScanEvent) {
        match self.prices.get(event.code()) {
            Some(price) => self.output.write_line(price),
            None => self
                .output
                .write_line(&format!("Product code {} not found", event.code())),
        }
    }
}
