//! Loader error types
//!
//! Every parse failure is reported with the source location it came from
//! (file path, row number, column index).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

/// Result type for loader operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors raised while reading source datasets
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: missing column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("row {row}: column {column} must be a string or number")]
    UnexpectedValue { row: usize, column: usize },

    #[error("row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: ModelError,
    },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::Io { .. } => "NEO_LOAD_IO",
            ExtractError::Csv(_) => "NEO_PARSE_CSV",
            ExtractError::Json(_) => "NEO_PARSE_JSON",
            ExtractError::MissingColumn { .. } => "NEO_PARSE_MISSING_COLUMN",
            ExtractError::UnexpectedValue { .. } => "NEO_PARSE_UNEXPECTED_VALUE",
            ExtractError::InvalidRecord { source, .. } => source.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_forwards_model_code() {
        let err = ExtractError::InvalidRecord {
            row: 7,
            source: ModelError::EmptyDesignation,
        };
        assert_eq!(err.code(), "NEO_PARSE_EMPTY_DESIGNATION");
        assert_eq!(err.to_string(), "row 7: designation must not be empty");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ExtractError::io(
            "data/missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.code(), "NEO_LOAD_IO");
        assert!(err.to_string().contains("data/missing.csv"));
    }
}
