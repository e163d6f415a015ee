//! Recognition worker lifecycle and engine backends.

pub mod backend;
#[cfg(feature = "tesseract")]
mod tesseract;
mod worker;

pub use backend::{BackendError, BackendFactory, RecognitionBackend};
#[cfg(feature = "tesseract")]
pub use tesseract::TesseractBackend;
pub use worker::{ProgressFn, RecognitionWorker};

use crate::error::Result;

/// An in-memory receipt image payload.
#[derive(Debug, Clone)]
pub struct ReceiptImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,

    /// MIME type tag; must begin with `image/` to be accepted for recognition.
    pub mime_type: String,
}

impl ReceiptImage {
    /// Create a payload from bytes and a known MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Create a payload by sniffing the image format from the bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)?;
        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            bytes,
        })
    }
}
