//! Recognition worker lifecycle management.
//!
//! The underlying text-recognition engine is expensive to set up, stateful,
//! and fault-prone. [`RecognitionWorker`] hides that behind one operation,
//! [`extract_text`](RecognitionWorker::extract_text), and owns the whole
//! lifecycle: lazy single-flight initialization, an exclusive recognition
//! slot, a caller-side time budget, corruption detection with automatic
//! teardown, and idempotent termination.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::error::OcrError;
use crate::models::config::RecognizerConfig;

use super::backend::{BackendFactory, RecognitionBackend};
use super::ReceiptImage;

/// Progress callback invoked with monotonically non-decreasing 0-100 values.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// Error-message markers that indicate the engine instance itself is corrupt
/// (for example a null image handle). On these the worker is torn down so the
/// next call re-initializes cleanly instead of failing repeatedly.
const CORRUPTION_MARKERS: [&str; 2] = ["SetImageFile", "null"];

fn is_corruption_signature(message: &str) -> bool {
    CORRUPTION_MARKERS.iter().any(|m| message.contains(m))
}

/// Process-wide recognition worker.
///
/// Clones share the same underlying engine instance; hand a clone to whoever
/// needs recognition rather than reaching for global state.
#[derive(Clone)]
pub struct RecognitionWorker {
    inner: Arc<WorkerShared>,
}

struct WorkerShared {
    /// The engine slot. `Some` means initialized. Locked only from blocking
    /// threads while an engine call may be in progress.
    engine: Mutex<Option<Box<dyn RecognitionBackend>>>,

    /// Set while a recognition call is in flight. Released by the blocking
    /// task itself, so a timed-out-but-still-running recognition keeps the
    /// worker observably busy.
    recognizing: AtomicBool,

    /// Serializes initialization attempts; a second concurrent caller awaits
    /// the first attempt instead of starting a duplicate.
    init_lock: tokio::sync::Mutex<()>,

    factory: BackendFactory,
    config: RecognizerConfig,
}

impl WorkerShared {
    fn lock_engine(&self) -> MutexGuard<'_, Option<Box<dyn RecognitionBackend>>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// One-time setup sequence: acquire an engine instance, load language
    /// data, configure recognition parameters. Runs on a blocking thread.
    fn initialize_blocking(&self) -> Result<(), OcrError> {
        let mut slot = self.lock_engine();
        if slot.is_some() {
            return Ok(());
        }

        debug!("acquiring recognition engine instance");
        let mut engine =
            (self.factory)().map_err(|e| OcrError::InitializationFailed(e.to_string()))?;

        debug!("loading '{}' language data", self.config.language);
        engine
            .load_language(&self.config.language)
            .map_err(|e| OcrError::InitializationFailed(e.to_string()))?;

        debug!("configuring recognition parameters");
        engine
            .set_parameters(&self.config)
            .map_err(|e| OcrError::InitializationFailed(e.to_string()))?;

        info!("recognition worker initialized");
        *slot = Some(engine);
        Ok(())
    }

    /// Runs one recognition call on a blocking thread. On a corruption
    /// signature the engine is torn down in place, which also covers stale
    /// calls whose caller already timed out and went away.
    fn recognize_blocking(
        &self,
        image: &ReceiptImage,
        reporter: &ProgressReporter,
    ) -> Result<String, OcrError> {
        let mut slot = self.lock_engine();
        let engine = slot.as_mut().ok_or_else(|| {
            OcrError::Recognition("recognition worker is not initialized".to_string())
        })?;

        let mut emit = |pct: u8| reporter.report(pct);
        match engine.recognize(image, &mut emit) {
            Ok(text) => Ok(text),
            Err(err) => {
                let message = err.to_string();
                if is_corruption_signature(&message) {
                    warn!("corrupted recognition engine, resetting: {message}");
                    if let Some(mut engine) = slot.take() {
                        if let Err(e) = engine.terminate() {
                            warn!("error terminating corrupted engine: {e}");
                        }
                    }
                    Err(OcrError::EngineFault(message))
                } else {
                    Err(OcrError::Recognition(message))
                }
            }
        }
    }
}

impl RecognitionWorker {
    /// Create a worker with the default configuration.
    pub fn new(factory: BackendFactory) -> Self {
        Self::with_config(factory, RecognizerConfig::default())
    }

    /// Create a worker with an explicit configuration.
    pub fn with_config(factory: BackendFactory, config: RecognizerConfig) -> Self {
        Self {
            inner: Arc::new(WorkerShared {
                engine: Mutex::new(None),
                recognizing: AtomicBool::new(false),
                init_lock: tokio::sync::Mutex::new(()),
                factory,
                config,
            }),
        }
    }

    /// Whether the engine is currently initialized.
    pub fn is_initialized(&self) -> bool {
        self.inner.lock_engine().is_some()
    }

    /// Warm up the engine ahead of the first recognition call.
    ///
    /// Single-flight: concurrent callers await the same attempt. A setup
    /// failure leaves the worker uninitialized so a later call retries from
    /// scratch.
    pub async fn initialize(&self) -> Result<(), OcrError> {
        let _guard = self.inner.init_lock.lock().await;
        let shared = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || shared.initialize_blocking())
            .await
            .map_err(|e| OcrError::InitializationFailed(e.to_string()))?
    }

    /// Recognize text in a receipt image.
    ///
    /// Exclusive: a call made while another recognition is in flight fails
    /// immediately with [`OcrError::Busy`] rather than queueing. The call is
    /// abandoned after the configured timeout; the engine call itself is not
    /// cancelled, and a follow-up call may still find the worker busy.
    pub async fn extract_text(
        &self,
        image: &ReceiptImage,
        progress: Option<ProgressFn>,
    ) -> Result<String, OcrError> {
        validate_image(image)?;

        let flight = FlightGuard::claim(Arc::clone(&self.inner)).ok_or(OcrError::Busy)?;
        self.initialize().await?;

        let reporter = Arc::new(ProgressReporter::new(progress));
        reporter.report(25);

        let shared = Arc::clone(&self.inner);
        let image = image.clone();
        let task_reporter = Arc::clone(&reporter);
        let task = tokio::task::spawn_blocking(move || {
            // The guard travels with the blocking task: the busy slot is held
            // until the engine call actually finishes, not until the caller
            // stops waiting for it.
            let _flight = flight;
            shared.recognize_blocking(&image, &task_reporter)
        });

        match tokio::time::timeout(self.inner.config.timeout(), task).await {
            Ok(Ok(Ok(text))) => {
                reporter.report(100);
                debug!("extracted {} characters of text", text.len());
                Ok(text)
            }
            Ok(Ok(Err(err))) => Err(err),
            Ok(Err(join_err)) => Err(OcrError::Recognition(join_err.to_string())),
            Err(_) => {
                warn!(
                    "recognition exceeded {}s budget, abandoning wait",
                    self.inner.config.timeout_secs
                );
                Err(OcrError::Timeout(self.inner.config.timeout_secs))
            }
        }
    }

    /// Tear down the engine and release its resources.
    ///
    /// Idempotent and safe from any state, including never-initialized.
    /// Backend teardown errors are logged and suppressed; teardown always
    /// succeeds from the caller's perspective.
    pub async fn terminate(&self) {
        let _guard = self.inner.init_lock.lock().await;
        let shared = Arc::clone(&self.inner);
        let result = tokio::task::spawn_blocking(move || {
            if let Some(mut engine) = shared.lock_engine().take() {
                if let Err(e) = engine.terminate() {
                    warn!("error terminating recognition worker: {e}");
                }
                true
            } else {
                false
            }
        })
        .await;

        match result {
            Ok(true) => info!("recognition worker terminated"),
            Ok(false) => {}
            Err(e) => warn!("recognition worker teardown task failed: {e}"),
        }
    }
}

fn validate_image(image: &ReceiptImage) -> Result<(), OcrError> {
    if image.bytes.is_empty() {
        return Err(OcrError::InvalidInput("no image data provided".to_string()));
    }
    if !image.mime_type.starts_with("image/") {
        return Err(OcrError::InvalidInput(format!(
            "unsupported file type '{}', expected an image",
            image.mime_type
        )));
    }
    Ok(())
}

/// Releases the recognition slot when dropped.
struct FlightGuard {
    shared: Arc<WorkerShared>,
}

impl FlightGuard {
    fn claim(shared: Arc<WorkerShared>) -> Option<Self> {
        shared
            .recognizing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        Some(Self { shared })
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.shared.recognizing.store(false, Ordering::SeqCst);
    }
}

/// Forwards progress to the caller, clamped to non-decreasing 0-100 values.
struct ProgressReporter {
    last: AtomicU8,
    callback: Option<ProgressFn>,
}

impl ProgressReporter {
    fn new(callback: Option<ProgressFn>) -> Self {
        Self {
            last: AtomicU8::new(0),
            callback,
        }
    }

    fn report(&self, pct: u8) {
        let pct = pct.min(100);
        let prev = self.last.fetch_max(pct, Ordering::SeqCst);
        if pct < prev {
            return;
        }
        if let Some(callback) = &self.callback {
            callback(pct);
        }
    }
}
