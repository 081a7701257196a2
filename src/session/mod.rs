//! The interactive prompt loop.
//!
//! One URL is read, validated, and fully fetched before the next prompt.
//! A blank line or end of input ends the session.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

use crate::config::FetcherConfig;
use crate::download::{ErrorKind, FetchError, FetchOutcome, ImageFetcher};
use crate::output;
use crate::parser::validate_image_url;

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        /// The directory that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Reading input or writing status lines failed.
    #[error("terminal IO failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Per-session counters. Returned to the caller, never printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Non-blank lines entered.
    pub submitted: usize,
    /// Lines rejected by URL validation.
    pub invalid: usize,
    /// Images written to disk.
    pub saved: usize,
    /// URLs whose destination file already existed.
    pub skipped: usize,
    /// Fetches that ended in an error.
    pub failed: usize,
}

impl SessionStats {
    fn record(&mut self, result: &Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Saved { .. }) => self.saved += 1,
            Ok(FetchOutcome::DuplicateSkipped { .. }) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Creates `dir` and its parents if missing. Existing directories are fine.
///
/// # Errors
///
/// Returns [`SessionError::OutputDir`] if the directory cannot be created.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), SessionError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| SessionError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })
}

/// Runs the prompt loop until a blank line or end of input.
///
/// Creates `config.output_dir`, prints the banner, then for each line: blank
/// ends the session, an invalid URL prints a rejection, and a valid URL is
/// fetched with `fetcher` and its outcome printed.
///
/// # Errors
///
/// Returns [`SessionError`] if the output directory cannot be created or the
/// terminal cannot be read or written. Per-URL failures never end the session,
/// and neither does a line that is not valid UTF-8.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
pub async fn run_session<R, W>(
    mut input: R,
    out: &mut W,
    fetcher: &ImageFetcher,
    config: &FetcherConfig,
) -> Result<SessionStats, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    ensure_output_dir(&config.output_dir).await?;
    output::write_banner(out)?;

    let mut raw = Vec::new();
    let mut stats = SessionStats::default();

    loop {
        output::write_prompt(out)?;
        raw.clear();
        if input.read_until(b'\n', &mut raw).await? == 0 {
            debug!("end of input");
            break;
        }
        // Undecodable bytes become U+FFFD and fail validation like any other junk.
        let line = String::from_utf8_lossy(&raw);
        let candidate = line.trim();
        if candidate.is_empty() {
            break;
        }
        stats.submitted += 1;

        let url = match validate_image_url(candidate) {
            Ok(url) => url,
            Err(e) => {
                debug!(error = %e, "input rejected");
                stats.invalid += 1;
                output::write_lines(out, &[output::invalid_url_line()])?;
                continue;
            }
        };

        let result = fetcher.fetch(&url, &config.output_dir).await;
        if let Err(e) = &result {
            match e.kind() {
                ErrorKind::Unexpected => info!(url = %url, error = %e, "fetch failed unexpectedly"),
                ErrorKind::Connection | ErrorKind::Validation => {
                    debug!(url = %url, error = %e, "fetch rejected");
                }
            }
        }
        stats.record(&result);
        output::write_lines(out, &output::fetch_result_lines(candidate, &result))?;
    }

    output::write_closing(out)?;
    debug!(?stats, "session finished");
    Ok(stats)
}
