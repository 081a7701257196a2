//! Validation of interactively entered image URLs.
//!
//! A candidate is accepted when it parses as a URL, uses the `http` or
//! `https` scheme, and its network location contains a dot.
//!
//! # Example
//!
//! ```
//! use image_fetcher_core::parser::validate_image_url;
//!
//! let url = validate_image_url("https://example.com/cat.png").unwrap();
//! assert_eq!(url.scheme(), "https");
//! ```

mod error;
mod url;

pub use error::ParseError;
pub use url::{is_valid_image_url, validate_image_url};
