//! Sale controller: the kata's only decision logic.

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{BarcodeSource, Catalog, SaleView, ScanHandler};
use crate::domain::ScanEvent;

/// Turns each scan notification into exactly one display call.
///
/// The controller is stateless between scans. Every notification is
/// classified on its own into one of three branches and ends in exactly one
/// call on the injected [`SaleView`]:
///
/// 1. Empty payload → `display_no_barcode_provided`, catalog never consulted
/// 2. Code absent from the catalog → `display_product_not_found`
/// 3. Code present → `display_price` with the stored string, verbatim
///
/// Scanning the same code twice produces the same display call twice;
/// nothing accumulates.
pub struct SaleController {
    catalog: Box<dyn Catalog>,
    view: Box<dyn SaleView>,
}

impl SaleController {
    /// Create a controller with the given collaborators.
    ///
    /// The controller takes ownership; both collaborators live exactly as
    /// long as it does.
    pub fn new(catalog: Box<dyn Catalog>, view: Box<dyn SaleView>) -> Self {
        Self { catalog, view }
    }

    /// Create a controller and subscribe it to `source` in one step.
    ///
    /// The subscription is permanent for the source's lifetime. The
    /// returned [`Arc`] is the same handler the source now holds, so tests
    /// and callers can drive it directly as well.
    pub fn attach(
        source: &dyn BarcodeSource,
        catalog: Box<dyn Catalog>,
        view: Box<dyn SaleView>,
    ) -> Arc<Self> {
        let controller = Arc::new(Self::new(catalog, view));
        // Clone first, coerce at the binding: `Arc::clone` with the
        // annotated type would demand an `&Arc<dyn ScanHandler>` argument.
        let handler: Arc<dyn ScanHandler> = controller.clone();
        source.subscribe(handler);
        controller
    }
}

impl ScanHandler for SaleController {
    fn handle_scan(&self, event: &ScanEvent) {
        if event.is_empty() {
            // Empty wins unconditionally; the catalog is not consulted
            // even if it happens to contain an empty-string key.
            debug!("scan carried no barcode");
            self.view.display_no_barcode_provided();
            return;
        }

        let code = event.code();

        if !self.catalog.contains_barcode(code) {
            debug!(barcode = code, "barcode not in catalog");
            self.view.display_product_not_found(code);
            return;
        }

        match self.catalog.find_price(code) {
            Some(price) => {
                debug!(barcode = code, price = %price, "price found");
                self.view.display_price(&price);
            }
            // A catalog answering `contains` yes and `find` none is
            // inconsistent; the code is treated as not found rather than
            // letting one scan escape without a display call.
            None => {
                debug!(barcode = code, "catalog lost the price between queries");
                self.view.display_product_not_found(code);
            }
        }
    }
}
