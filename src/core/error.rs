//! Error types for castgrep

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using castgrep's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Castgrep error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
