//! Core library for receipt OCR processing.
//!
//! This crate provides:
//! - Recognition worker lifecycle (lazy init, busy rejection, timeouts,
//!   corruption recovery)
//! - Rule-based receipt field extraction (vendor, date, amounts, line items)
//! - Expense categorization and confidence scoring
//! - Structured receipt models for downstream expense tracking

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{OcrError, RecrError, Result};
pub use models::config::RecognizerConfig;
pub use models::receipt::{Confidence, ExtractedReceipt, LineItem};
pub use ocr::backend::{BackendError, BackendFactory, RecognitionBackend};
pub use ocr::{ProgressFn, ReceiptImage, RecognitionWorker};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractBackend;
pub use receipt::ReceiptParser;

/// Run the full image-to-receipt pipeline: recognize text in the image, then
/// parse it into a structured receipt.
///
/// Recognition failures surface as [`OcrError`]; parsing itself never fails,
/// low-quality text just lowers the receipt's confidence rating.
pub async fn process_receipt_image(
    worker: &RecognitionWorker,
    parser: &ReceiptParser,
    image: &ReceiptImage,
    progress: Option<ProgressFn>,
) -> std::result::Result<ExtractedReceipt, OcrError> {
    let text = worker.extract_text(image, progress).await?;
    Ok(parser.parse(&text))
}
