//! Error types for URL validation.

use thiserror::Error;

/// Reasons a candidate image URL is rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// URL is malformed, uses an unsupported scheme, or has no dotted netloc
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed validation
        url: String,
        /// Why the URL is invalid
        reason: String,
    },
}

impl ParseError {
    /// Creates an `InvalidUrl` error for a non-web URL scheme.
    #[must_use]
    pub fn unsupported_scheme(url: &str, scheme: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("scheme '{scheme}' is not supported"),
        }
    }

    /// Creates an `InvalidUrl` error for a malformed URL.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: parse_error.to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a URL whose netloc is missing or has no dot.
    #[must_use]
    pub fn undotted_host(url: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: "network location must contain a dot".to_string(),
        }
    }
}
