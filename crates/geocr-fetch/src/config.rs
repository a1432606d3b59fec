//! Retrieval configuration.

use std::time::Duration;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for loading source documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl FetchConfig {
    /// Configuration with the given request timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }
}
