//! Image Fetcher Core Library
//!
//! This library provides the core functionality for the image fetcher tool,
//! which reads image URLs one at a time, downloads them, and stores them in a
//! local folder while refusing duplicates, oversized payloads, and anything
//! that is not an image.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - URL validation for interactive input
//! - [`download`] - HTTP fetcher, filename resolution, and fetch outcomes
//! - [`session`] - The interactive prompt loop
//! - [`output`] - Status line rendering
//! - [`config`] - Fetch defaults threaded through the session and fetcher

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod output;
pub mod parser;
pub mod session;
mod user_agent;

// Re-export commonly used types
pub use config::FetcherConfig;
pub use download::{
    DEFAULT_FILENAME, ErrorKind, FetchError, FetchOutcome, ImageFetcher, filename_from_url,
};
pub use parser::{ParseError, is_valid_image_url, validate_image_url};
pub use session::{SessionError, SessionStats, ensure_output_dir, run_session};
