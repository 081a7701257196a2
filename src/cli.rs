//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Mindfully fetch images from the web into a local folder.
///
/// Reads image URLs from standard input one per line and saves each image
/// into ./Fetched_Images. Press Enter on an empty line to finish.
#[derive(Parser, Debug)]
#[command(name = "image-fetcher")]
#[command(author, version, about)]
pub struct Args {
    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Default tracing filter for these flags, used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
