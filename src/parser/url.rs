//! Image URL validation for interactive input.

use tracing::{debug, trace};
use url::Url;

use super::error::ParseError;

/// Returns `true` when `candidate` is an `http`/`https` URL with a dotted netloc.
///
/// This is a syntactic check only. It does not resolve the host or confirm the
/// target serves an image. Malformed input is rejected, never an error.
///
/// # Examples
///
/// ```
/// use image_fetcher_core::parser::is_valid_image_url;
///
/// assert!(is_valid_image_url("https://example.com/a.jpg"));
/// assert!(!is_valid_image_url("ftp://example.com/a.jpg"));
/// assert!(!is_valid_image_url("not a url"));
/// ```
#[must_use]
pub fn is_valid_image_url(candidate: &str) -> bool {
    validate_image_url(candidate).is_ok()
}

/// Parses `candidate` and returns the URL if it passes the image URL rules.
///
/// # Validation rules:
/// - Must be parseable by the `url` crate
/// - Must use http or https scheme (no ftp, file, etc.)
/// - Must spell out a `//` authority whose text contains at least one `.`
///
/// The authority is the raw netloc: credentials, host, and port all count,
/// so `https://first.last@localhost/a.png` is accepted.
///
/// # Errors
///
/// Returns [`ParseError`] describing the first rule the input breaks.
#[tracing::instrument(level = "trace", skip(candidate), fields(len = candidate.len()))]
pub fn validate_image_url(candidate: &str) -> Result<Url, ParseError> {
    let parsed = Url::parse(candidate).map_err(|e| {
        debug!(url = %candidate, error = %e, "URL failed to parse");
        ParseError::malformed(candidate, &e.to_string())
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(ParseError::unsupported_scheme(candidate, scheme)),
    }

    // The parser repairs `http:example.com`; the raw text must carry `//` itself.
    let dotted = raw_netloc(candidate).is_some_and(|netloc| netloc.contains('.'));
    if !dotted {
        return Err(ParseError::undotted_host(candidate));
    }

    trace!(url = %parsed, "image URL accepted");
    Ok(parsed)
}

/// Returns the text between `scheme://` and the first `/`, `?`, or `#`.
fn raw_netloc(candidate: &str) -> Option<&str> {
    let (_, rest) = candidate.trim_start().split_once(':')?;
    let authority = rest.strip_prefix("//")?;
    let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    Some(&authority[..end])
}
