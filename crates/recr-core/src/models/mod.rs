//! Data models for receipt extraction.

pub mod config;
pub mod receipt;

pub use config::RecognizerConfig;
pub use receipt::{Confidence, ExtractedReceipt, LineItem};
