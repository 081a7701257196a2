//! Error types for the download module.
//!
//! Every failure a single fetch can hit is a [`FetchError`] variant. The
//! session groups them with [`FetchError::kind`] to pick the status line.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification used for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not complete or the server answered with an error status.
    Connection,
    /// The response was received but is not an acceptable image.
    Validation,
    /// Anything else, such as a failed disk write.
    Unexpected,
}

/// Errors that can occur while fetching one image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The declared content type is not an image.
    #[error("Invalid content type: {content_type}. Only images are allowed.")]
    UnsupportedContentType {
        /// The URL whose response was rejected.
        url: String,
        /// The Content-Type header value.
        content_type: String,
    },

    /// Declared or received size is over the limit.
    #[error("File too large (>{limit_bytes} bytes). Download aborted for safety.")]
    TooLarge {
        /// The URL whose response was rejected.
        url: String,
        /// The configured limit.
        limit_bytes: u64,
        /// Size from Content-Length, or bytes received when the stream overflowed.
        observed_bytes: u64,
    },

    /// File system error while writing the image.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a content-type rejection.
    pub fn unsupported_content_type(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::UnsupportedContentType {
            url: url.into(),
            content_type: content_type.into(),
        }
    }

    /// Creates a size-limit rejection.
    pub fn too_large(url: impl Into<String>, limit_bytes: u64, observed_bytes: u64) -> Self {
        Self::TooLarge {
            url: url.into(),
            limit_bytes,
            observed_bytes,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Maps a reqwest error to `Timeout` or `Network`.
    pub(crate) fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::timeout(url)
        } else {
            Self::network(url, source)
        }
    }

    /// Returns the reporting class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                ErrorKind::Connection
            }
            Self::UnsupportedContentType { .. } | Self::TooLarge { .. } => ErrorKind::Validation,
            Self::Io { .. } => ErrorKind::Unexpected,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>`: every variant needs the
// url or path, which the source errors don't carry.
