//! Non-error results of a fetch.

use std::path::{Path, PathBuf};

/// What happened to an image that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body was written to a new file.
    Saved {
        /// Name of the written file.
        filename: String,
        /// Full destination path.
        path: PathBuf,
        /// Bytes written.
        bytes: u64,
    },
    /// A file with the same name already existed; nothing was written.
    DuplicateSkipped {
        /// Name of the existing file.
        filename: String,
        /// Path of the existing file.
        path: PathBuf,
    },
}

impl FetchOutcome {
    /// Returns the destination filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Saved { filename, .. } | Self::DuplicateSkipped { filename, .. } => filename,
        }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Saved { path, .. } | Self::DuplicateSkipped { path, .. } => path,
        }
    }

    /// Returns `true` if a new file was written.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}
