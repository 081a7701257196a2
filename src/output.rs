//! Status line formatting for the interactive session.
//!
//! Every per-URL outcome becomes one or two lines prefixed with
//! [`SUCCESS_MARKER`] or [`FAILURE_MARKER`].

use std::io::{self, Write};

use crate::download::{ErrorKind, FetchError, FetchOutcome};

/// Prefix for successful outcomes.
pub const SUCCESS_MARKER: &str = "✓";

/// Prefix for failures and skips.
pub const FAILURE_MARKER: &str = "✗";

/// Lines printed once when the session starts.
pub const BANNER_LINES: [&str; 3] = [
    "Welcome to the Ubuntu Image Fetcher",
    "A tool for mindfully collecting images from the web",
    "Enter image URLs one by one. Press Enter without input to finish.",
];

/// Prompt shown before each line is read.
pub const PROMPT: &str = "Please enter the image URL (or press Enter to finish): ";

/// Printed when the session ends.
pub const CLOSING_MESSAGE: &str = "Connection strengthened. Community enriched.";

/// Line for input that failed URL validation.
#[must_use]
pub fn invalid_url_line() -> String {
    format!("{FAILURE_MARKER} Invalid URL. Please enter a valid HTTP/HTTPS URL.")
}

/// Lines describing the result of fetching `url`.
#[must_use]
pub fn fetch_result_lines(url: &str, result: &Result<FetchOutcome, FetchError>) -> Vec<String> {
    match result {
        Ok(FetchOutcome::Saved { filename, path, .. }) => vec![
            format!("{SUCCESS_MARKER} Successfully fetched: {filename}"),
            format!("{SUCCESS_MARKER} Image saved to {}", path.display()),
        ],
        Ok(FetchOutcome::DuplicateSkipped { filename, .. }) => vec![format!(
            "{FAILURE_MARKER} Image already exists: {filename}. Skipping to avoid duplicates."
        )],
        Err(error) => {
            let label = match error.kind() {
                ErrorKind::Connection => "Connection error for",
                ErrorKind::Validation => "Validation error for",
                ErrorKind::Unexpected => "An error occurred for",
            };
            vec![format!("{FAILURE_MARKER} {label} {url}: {}", error_detail(error))]
        }
    }
}

/// Short error description without the URL, which the line already names.
fn error_detail(error: &FetchError) -> String {
    match error {
        FetchError::Network { source, .. } => source.to_string(),
        FetchError::Timeout { .. } => "request timed out".to_string(),
        FetchError::HttpStatus { status, .. } => format!("HTTP {status}"),
        other => other.to_string(),
    }
}

/// Writes the banner followed by a blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    for line in BANNER_LINES {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Writes the prompt without a newline and flushes so it shows before input.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

/// Writes each line followed by a newline.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes a blank line and the closing message.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{CLOSING_MESSAGE}")?;
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_saved_outcome_has_two_success_lines() {
        let outcome = FetchOutcome::Saved {
            filename: "cat.png".to_string(),
            path: PathBuf::from("Fetched_Images/cat.png"),
            bytes: 10,
        };
        let lines = fetch_result_lines("https://example.com/cat.png", &Ok(outcome));
        assert_eq!(
            lines,
            vec![
                "✓ Successfully fetched: cat.png".to_string(),
                "✓ Image saved to Fetched_Images/cat.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicate_outcome_is_failure_marked_skip() {
        let outcome = FetchOutcome::DuplicateSkipped {
            filename: "cat.png".to_string(),
            path: PathBuf::from("Fetched_Images/cat.png"),
        };
        let lines = fetch_result_lines("https://example.com/cat.png", &Ok(outcome));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(FAILURE_MARKER));
        assert!(lines[0].contains("already exists: cat.png"));
    }

    #[test]
    fn test_http_status_is_connection_error_line() {
        let err = FetchError::http_status("https://example.com/a.png", 404);
        let lines = fetch_result_lines("https://example.com/a.png", &Err(err));
        assert_eq!(
            lines,
            vec!["✗ Connection error for https://example.com/a.png: HTTP 404".to_string()]
        );
    }

    #[test]
    fn test_content_type_is_validation_error_line() {
        let err = FetchError::unsupported_content_type("https://example.com/a.png", "text/html");
        let lines = fetch_result_lines("https://example.com/a.png", &Err(err));
        assert!(lines[0].starts_with("✗ Validation error for https://example.com/a.png:"));
        assert!(lines[0].contains("text/html"));
    }

    #[test]
    fn test_io_error_is_generic_line() {
        let io_error = std::io::Error::other("disk full");
        let err = FetchError::io("Fetched_Images/a.png", io_error);
        let lines = fetch_result_lines("https://example.com/a.png", &Err(err));
        assert!(lines[0].starts_with("✗ An error occurred for https://example.com/a.png:"));
    }

    #[test]
    fn test_banner_and_closing_text() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        write_closing(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Welcome to the Ubuntu Image Fetcher\n"));
        assert!(text.ends_with("\n\nConnection strengthened. Community enriched.\n"));
    }
}
