//! Record model error types
//!
//! Raised while normalizing raw source tuples into model entities.
//! These surface at the loader boundary, never from the core.

use thiserror::Error;

/// Result type for model construction
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced when a raw field cannot be normalized
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("designation must not be empty")]
    EmptyDesignation,

    #[error("invalid {field} value '{value}': not a real number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid {field} value {value}: must be non-negative")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("invalid approach time '{0}': expected YYYY-MMM-DD HH:MM")]
    InvalidTime(String),
}

impl ModelError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::EmptyDesignation => "NEO_PARSE_EMPTY_DESIGNATION",
            ModelError::InvalidNumber { .. } => "NEO_PARSE_INVALID_NUMBER",
            ModelError::NegativeValue { .. } => "NEO_PARSE_NEGATIVE_VALUE",
            ModelError::InvalidTime(_) => "NEO_PARSE_INVALID_TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ModelError::EmptyDesignation.code(), "NEO_PARSE_EMPTY_DESIGNATION");
        assert_eq!(
            ModelError::InvalidTime("x".into()).code(),
            "NEO_PARSE_INVALID_TIME"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidNumber {
            field: "diameter",
            value: "abc".into(),
        };
        let display = err.to_string();
        assert!(display.contains("diameter"));
        assert!(display.contains("abc"));
    }
}
