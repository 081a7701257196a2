//! User-Agent string sent with every image request.

/// Product token identifying the tool to image hosts.
const PRODUCT_NAME: &str = "Ubuntu-Image-Fetcher";

/// Default User-Agent for image requests (`Ubuntu-Image-Fetcher/<version>`).
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("{PRODUCT_NAME}/{version}")
}
