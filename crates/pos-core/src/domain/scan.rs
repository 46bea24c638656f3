//! Scan events raised by a barcode source.

use std::fmt;

/// One barcode read, carrying the raw scanned payload.
///
/// The payload is opaque and possibly empty. It is matched against catalog
/// keys exactly as scanned: no trimming, no case folding, no digit
/// normalization. `"   "` and `"abc"` are ordinary lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanEvent(String);

impl ScanEvent {
    /// Wrap a raw scanner payload.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The scanned code exactly as the source delivered it.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// `true` when the source delivered no code at all.
    ///
    /// Only the zero-length payload counts; whitespace is a real code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ScanEvent {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ScanEvent {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
