//! Filename extraction and sanitization for fetched images.
//!
//! The destination name is the last URL path segment. Segments that are empty
//! or have no extension fall back to [`DEFAULT_FILENAME`]. Collision handling
//! is the fetcher's job; nothing here checks the filesystem.
//!
//! The segment is percent-decoded and sanitized, so `my%20cat.png` is saved as
//! `my cat.png`. Distinct URLs can therefore map to one name (`a%2Fb.png` and
//! `a_b.png` both become `a_b.png`), and the second one is skipped as a
//! duplicate.

use std::path::{Component, Path};

use tracing::debug;
use url::Url;

/// Name used when the URL path yields no usable filename.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Derives the destination filename for `url`.
///
/// # Examples
///
/// ```
/// use image_fetcher_core::download::filename_from_url;
/// use url::Url;
///
/// let url = Url::parse("https://host.example/path/cat.png").unwrap();
/// assert_eq!(filename_from_url(&url), "cat.png");
///
/// let url = Url::parse("https://host.example/path/noext").unwrap();
/// assert_eq!(filename_from_url(&url), "downloaded_image.jpg");
/// ```
#[must_use]
pub fn filename_from_url(url: &Url) -> String {
    let Some(last) = url.path_segments().and_then(|mut segments| segments.next_back()) else {
        return DEFAULT_FILENAME.to_string();
    };

    let decoded = urlencoding::decode(last).unwrap_or_else(|e| {
        debug!(segment = %last, error = %e, "URL decoding failed, using raw segment");
        last.into()
    });
    let name = sanitize_filename(&decoded);

    if name.is_empty() || !name.contains('.') || !is_safe_filename_segment(&name) {
        return DEFAULT_FILENAME.to_string();
    }
    name
}

/// Sanitizes a filename for filesystem safety.
///
/// Replaces characters that are invalid on common filesystems:
/// / \ : * ? " < > |
pub(crate) fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn is_safe_filename_segment(name: &str) -> bool {
    !Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
