//! Recording view: capture display calls instead of printing them.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use pos_core::application::ports::SaleView;

use super::messages;

/// One recorded display call.
///
/// Serializes for the CLI's JSON output as
/// `{"display": "price", "price": "$9.50"}`,
/// `{"display": "product_not_found", "barcode": "99999"}` or
/// `{"display": "no_barcode_provided"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "display", rename_all = "snake_case")]
pub enum DisplayCall {
    Price { price: String },
    ProductNotFound { barcode: String },
    NoBarcodeProvided,
}

impl DisplayCall {
    /// The exact line a [`ConsoleView`](super::ConsoleView) would have
    /// printed for this call.
    pub fn message(&self) -> String {
        match self {
            Self::Price { price } => price.clone(),
            Self::ProductNotFound { barcode } => messages::product_not_found(barcode),
            Self::NoBarcodeProvided => messages::NO_BARCODE.to_string(),
        }
    }
}

/// View that appends every display call to a shared list.
///
/// Clones share the same list, so a caller can hand one clone to the
/// controller and keep another to read the calls back out afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in display order.
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().expect("display call list poisoned").clone()
    }

    /// The recorded calls rendered as console lines.
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(DisplayCall::message).collect()
    }

    fn record(&self, call: DisplayCall) {
        self.calls.lock().expect("display call list poisoned").push(call);
    }
}

impl SaleView for RecordingView {
    fn display_price(&self, price: &str) {
        self.record(DisplayCall::Price {
            price: price.to_string(),
        });
    }

    fn display_product_not_found(&self, barcode: &str) {
        self.record(DisplayCall::ProductNotFound {
            barcode: barcode.to_string(),
        });
    }

    fn display_no_barcode_provided(&self) {
        self.record(DisplayCall::NoBarcodeProvided);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_display_order() {
        let view = RecordingView::new();
        view.display_price("$9.50");
        view.display_product_not_found("99999");
        view.display_no_barcode_provided();

        assert_eq!(
            view.calls(),
            vec![
                DisplayCall::Price {
                    price: "$9.50".to_string()
                },
                DisplayCall::ProductNotFound {
                    barcode: "99999".to_string()
                },
                DisplayCall::NoBarcodeProvided,
            ]
        );
    }

    #[test]
    fn clones_share_the_same_recording() {
        let view = RecordingView::new();
        let handle = view.clone();

        view.display_price("$9.50");

        assert_eq!(handle.lines(), vec!["$9.50"]);
    }

    #[test]
    fn lines_match_console_wording() {
        let view = RecordingView::new();
        view.display_no_barcode_provided();
        view.display_product_not_found("123");

        assert_eq!(
            view.lines(),
            vec!["No barcode was provided", "Product code 123 not found"]
        );
    }

    #[test]
    fn calls_serialize_with_a_display_tag() {
        let call = DisplayCall::Price {
            price: "$9.50".to_string(),
        };
        let json = serde_json::to_string(&call).unwrap();
        assert_eq!(json, r#"{"display":"price","price":"$9.50"}"#);

        let json = serde_json::to_string(&DisplayCall::NoBarcodeProvided).unwrap();
        assert_eq!(json, r#"{"display":"no_barcode_provided"}"#);
    }
}
