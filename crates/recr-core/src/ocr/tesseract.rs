//! Tesseract-backed recognition engine via leptess.

use leptess::{LepTess, Variable};

use crate::models::config::RecognizerConfig;
use crate::ocr::backend::{BackendError, RecognitionBackend};
use crate::ocr::{ReceiptImage, RecognitionWorker};

/// Recognition backend over a local Tesseract installation.
///
/// Tesseract creates the engine and loads language data in one step, so the
/// slot stays empty until [`load_language`](RecognitionBackend::load_language).
pub struct TesseractBackend {
    engine: Option<LepTess>,
}

impl TesseractBackend {
    pub fn acquire() -> Result<Self, BackendError> {
        Ok(Self { engine: None })
    }

    fn engine(&mut self) -> Result<&mut LepTess, BackendError> {
        self.engine
            .as_mut()
            .ok_or_else(|| BackendError::new("language data not loaded"))
    }
}

impl RecognitionBackend for TesseractBackend {
    fn load_language(&mut self, language: &str) -> Result<(), BackendError> {
        let engine = LepTess::new(None, language).map_err(BackendError::from_display)?;
        self.engine = Some(engine);
        Ok(())
    }

    fn set_parameters(&mut self, config: &RecognizerConfig) -> Result<(), BackendError> {
        self.engine()?
            .set_variable(Variable::TesseditCharWhitelist, &config.char_whitelist)
            .map_err(BackendError::from_display)
    }

    fn recognize(
        &mut self,
        image: &ReceiptImage,
        progress: &mut dyn FnMut(u8),
    ) -> Result<String, BackendError> {
        let engine = self.engine()?;
        engine
            .set_image_from_mem(&image.bytes)
            .map_err(BackendError::from_display)?;
        progress(50);
        engine.get_utf8_text().map_err(BackendError::from_display)
    }

    fn terminate(&mut self) -> Result<(), BackendError> {
        self.engine = None;
        Ok(())
    }
}

impl RecognitionWorker {
    /// Create a Tesseract-backed worker.
    pub fn tesseract(config: RecognizerConfig) -> Self {
        Self::with_config(
            Box::new(|| {
                TesseractBackend::acquire()
                    .map(|backend| Box::new(backend) as Box<dyn RecognitionBackend>)
            }),
            config,
        )
    }
}
