//! Output writer errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for writer operations
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors raised while writing query results
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported output file {}: expected a .csv or .json extension", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl WriteError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            WriteError::Io(_) => "NEO_WRITE_IO",
            WriteError::Csv(_) => "NEO_WRITE_CSV",
            WriteError::Json(_) => "NEO_WRITE_JSON",
            WriteError::UnsupportedFormat(_) => "NEO_WRITE_UNSUPPORTED_FORMAT",
        }
    }
}
