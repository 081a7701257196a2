//! HTTP fetcher that validates and stores one image per call.
//!
//! This module provides the `ImageFetcher` struct which issues a single GET,
//! checks the response headers against the image policy, and streams the
//! body into a new file.

use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use futures_util::StreamExt;
use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::constants::IMAGE_CONTENT_TYPE_PREFIX;
use super::error::FetchError;
use super::filename::filename_from_url;
use super::outcome::FetchOutcome;
use crate::config::FetcherConfig;

/// Fetches images over HTTP(S) into a directory.
///
/// Create once per session and reuse; the inner client pools connections.
///
/// # Example
///
/// ```no_run
/// use image_fetcher_core::{FetcherConfig, ImageFetcher};
/// use std::path::Path;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = ImageFetcher::new(&FetcherConfig::default())?;
/// let url = Url::parse("https://example.com/cat.png")?;
/// let outcome = fetcher.fetch(&url, Path::new("Fetched_Images")).await?;
/// println!("{}", outcome.path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    max_image_bytes: u64,
}

impl ImageFetcher {
    /// Creates a fetcher using the timeout, user agent, and size limit from `config`.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend cannot be initialised.
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            max_image_bytes: config.max_image_bytes,
        })
    }

    /// Fetches `url` and saves it under `dir`, which must already exist.
    ///
    /// Steps, stopping at the first failure:
    /// 1. GET the URL
    /// 2. Reject error statuses
    /// 3. Reject a present `Content-Type` that is not `image/*`
    /// 4. Reject a `Content-Length` over the size limit
    /// 5. Skip if the destination file already exists
    /// 6. Stream the body into a new file, aborting if it outgrows the limit
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The request fails (network error, timeout) or the status is 4xx/5xx
    /// - The content type is not an image
    /// - The image is larger than the limit
    /// - Writing to disk fails
    #[instrument(skip(self, dir), fields(url = %url))]
    pub async fn fetch(&self, url: &Url, dir: &Path) -> Result<FetchOutcome, FetchError> {
        let url_str = url.as_str();
        debug!("starting fetch");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_transport(url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url_str, status.as_u16()));
        }

        check_content_type(&response, url_str)?;

        if let Some(declared) = declared_content_length(&response)
            && declared > self.max_image_bytes
        {
            return Err(FetchError::too_large(url_str, self.max_image_bytes, declared));
        }

        let filename = filename_from_url(url);
        let path = dir.join(&filename);

        // create_new makes the existence check and the create a single step.
        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        let file = match opened {
            Ok(file) => file,
            Err(e) if e.kind() == IoErrorKind::AlreadyExists => {
                info!(path = %path.display(), "destination exists, skipping");
                return Ok(FetchOutcome::DuplicateSkipped { filename, path });
            }
            Err(e) => return Err(FetchError::io(path, e)),
        };

        let streamed = stream_to_file(file, response, url_str, &path, self.max_image_bytes).await;
        let bytes = match streamed {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), "removing partial file after error");
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    warn!(path = %path.display(), error = %remove_err, "failed to remove partial file");
                }
                return Err(e);
            }
        };

        info!(path = %path.display(), bytes, "image saved");
        Ok(FetchOutcome::Saved {
            filename,
            path,
            bytes,
        })
    }
}

/// Rejects a present `Content-Type` that does not start with `image/`.
fn check_content_type(response: &reqwest::Response, url: &str) -> Result<(), FetchError> {
    let Some(value) = response.headers().get(CONTENT_TYPE) else {
        debug!("no content type declared");
        return Ok(());
    };
    let content_type = String::from_utf8_lossy(value.as_bytes());
    let is_image = content_type
        .get(..IMAGE_CONTENT_TYPE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_CONTENT_TYPE_PREFIX));
    if is_image {
        Ok(())
    } else {
        Err(FetchError::unsupported_content_type(url, content_type))
    }
}

fn declared_content_length(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Streams response body to file, returning bytes written.
///
/// Fails with `TooLarge` as soon as the running total passes `limit`.
async fn stream_to_file(
    file: File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
    limit: u64,
) -> Result<u64, FetchError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| FetchError::from_transport(url, e))?;

        let received = bytes_written.saturating_add(chunk.len() as u64);
        if received > limit {
            return Err(FetchError::too_large(url, limit, received));
        }

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| FetchError::io(file_path.to_path_buf(), e))?;

        bytes_written = received;
    }

    writer
        .flush()
        .await
        .map_err(|e| FetchError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
