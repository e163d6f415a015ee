//! Recognition engine backend abstraction.
//!
//! The worker is generic over this trait so tests can drive the lifecycle
//! with mock engines and the Tesseract binding stays behind a feature gate.

use thiserror::Error;

use crate::models::config::RecognizerConfig;
use crate::ocr::ReceiptImage;

/// Error raised by a recognition backend.
///
/// Carries only the engine's message; the worker classifies it (corruption
/// versus transient) by signature.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap any displayable engine error.
    pub fn from_display(err: impl std::fmt::Display) -> Self {
        Self::new(err.to_string())
    }
}

/// A text-recognition engine instance.
///
/// Setup runs as a sequence the worker drives: a [`BackendFactory`] acquires
/// the instance, then [`load_language`](Self::load_language) and
/// [`set_parameters`](Self::set_parameters) complete it. All calls may block;
/// the worker schedules them off the async runtime.
pub trait RecognitionBackend: Send + 'static {
    /// Load language resources into the engine.
    fn load_language(&mut self, language: &str) -> Result<(), BackendError>;

    /// Apply recognition parameters (character whitelist and the like).
    fn set_parameters(&mut self, config: &RecognizerConfig) -> Result<(), BackendError>;

    /// Recognize text in the image. `progress` may be called with 0-100
    /// percentages; engines without fine-grained progress may skip it, the
    /// worker still reports an initial and final value.
    fn recognize(
        &mut self,
        image: &ReceiptImage,
        progress: &mut dyn FnMut(u8),
    ) -> Result<String, BackendError>;

    /// Release engine resources.
    fn terminate(&mut self) -> Result<(), BackendError>;
}

/// Acquires a fresh engine instance for the worker.
pub type BackendFactory =
    Box<dyn Fn() -> Result<Box<dyn RecognitionBackend>, BackendError> + Send + Sync>;
