//! Fetch defaults threaded through the session and fetcher.
//!
//! The tool has no configuration file and no behavioural flags. The values
//! here are fixed for the binary but can be substituted in tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::download::constants::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_OUTPUT_DIR, REQUEST_TIMEOUT_SECS};
use crate::user_agent;

/// Settings for one fetch session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Directory images are written to; created on session start.
    pub output_dir: PathBuf,
    /// Largest accepted image in bytes, checked against headers and the streamed body.
    pub max_image_bytes: u64,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: user_agent::default_fetch_user_agent(),
        }
    }
}

impl FetcherConfig {
    /// Overrides the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Overrides the size limit.
    #[must_use]
    pub fn with_max_image_bytes(mut self, max_image_bytes: u64) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
