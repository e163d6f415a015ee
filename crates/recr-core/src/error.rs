//! Error types for the recr-core library.

use thiserror::Error;

/// Main error type for the recr library.
#[derive(Error, Debug)]
pub enum RecrError {
    /// OCR worker error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by the recognition worker.
///
/// Every variant carries a message suitable for direct user display. Parse
/// quality is never an error: the field extractor always returns a value and
/// reports quality through the receipt's confidence rating.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Engine setup could not complete; retrying later gets a clean attempt.
    #[error("failed to initialize text recognition: {0}")]
    InitializationFailed(String),

    /// A recognition call was made while another was still in flight.
    #[error("text recognition is already in progress, please wait")]
    Busy,

    /// The supplied payload is missing or not an image.
    #[error("invalid image: {0}")]
    InvalidInput(String),

    /// Recognition exceeded the time budget. The engine call itself is not
    /// cancelled; a follow-up call may still find the worker busy.
    #[error("text recognition timed out after {0} seconds")]
    Timeout(u64),

    /// The engine reported a corruption-style failure. The worker has already
    /// been torn down; the next call re-initializes from scratch.
    #[error("recognition engine fault: {0}")]
    EngineFault(String),

    /// Transient recognition failure; the initialized worker is kept.
    #[error("failed to extract text from receipt: {0}")]
    Recognition(String),
}

/// Result type for the recr library.
pub type Result<T> = std::result::Result<T, RecrError>;
