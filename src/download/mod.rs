//! Image fetching: one GET, header checks, and a streamed write to disk.
//!
//! # Features
//!
//! - Content-Type must be `image/*` when the server declares one
//! - Size limit enforced from Content-Length and again while streaming
//! - Existing files are never overwritten (duplicate skip)
//! - Partial files are removed when a transfer fails
//!
//! # Example
//!
//! ```no_run
//! use image_fetcher_core::download::{FetchOutcome, ImageFetcher};
//! use image_fetcher_core::FetcherConfig;
//! use std::path::Path;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = ImageFetcher::new(&FetcherConfig::default())?;
//! let url = Url::parse("https://example.com/cat.png")?;
//! match fetcher.fetch(&url, Path::new("Fetched_Images")).await? {
//!     FetchOutcome::Saved { path, .. } => println!("saved {}", path.display()),
//!     FetchOutcome::DuplicateSkipped { filename, .. } => println!("have {filename}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub(crate) mod constants;
mod error;
mod filename;
mod outcome;

pub use client::ImageFetcher;
pub use constants::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_OUTPUT_DIR, REQUEST_TIMEOUT_SECS};
pub use error::{ErrorKind, FetchError};
pub use filename::{DEFAULT_FILENAME, filename_from_url};
pub use outcome::FetchOutcome;
