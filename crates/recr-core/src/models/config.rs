//! Configuration for the recognition worker.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Recognition engine configuration applied during worker setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Language data to load.
    pub language: String,

    /// Characters the engine is allowed to recognize. Receipts only carry
    /// alphanumerics and a handful of punctuation; restricting the set cuts
    /// down on misreads.
    pub char_whitelist: String,

    /// Caller-side recognition time budget in seconds. The engine call is not
    /// cancelled when it elapses, only abandoned.
    pub timeout_secs: u64,
}

impl RecognizerConfig {
    /// The recognition timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            char_whitelist:
                "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz .,/$-:()#"
                    .to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert_eq!(config.language, "eng");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.char_whitelist.contains('$'));
    }
}
