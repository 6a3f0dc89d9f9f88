//! Error types for reploclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a scan.
///
/// Per-file read and decode failures are not errors: they are logged and
/// counted as zero lines so that a single bad file never stops a scan.
#[derive(Error, Debug)]
pub enum ReplocError {
    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Scan root exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
