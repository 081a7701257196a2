//! Constants for the download module (output folder, size cap, timeout).

/// Directory, relative to the working directory, that images are saved into.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Largest accepted image (10 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Whole-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Prefix every accepted `Content-Type` must start with.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
