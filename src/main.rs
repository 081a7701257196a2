//! CLI entry point for the image fetcher.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use image_fetcher_core::{FetcherConfig, ImageFetcher, run_session};
use tokio::io::BufReader;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // RUST_LOG wins over the verbosity flags.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = FetcherConfig::default();
    let fetcher = ImageFetcher::new(&config).context("failed to build HTTP client")?;
    info!(
        output_dir = %config.output_dir.display(),
        max_image_bytes = config.max_image_bytes,
        timeout_secs = config.timeout.as_secs(),
        "Image fetcher starting"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout().lock();
    let stats = run_session(stdin, &mut stdout, &fetcher, &config).await?;

    info!(
        saved = stats.saved,
        skipped = stats.skipped,
        failed = stats.failed,
        invalid = stats.invalid,
        "Session ended"
    );

    Ok(())
}
