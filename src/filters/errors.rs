//! Filter construction errors
//!
//! Parse errors come from coercing user-supplied text into bounds.
//! `ContradictoryBounds` is a usage error: it is reported for diagnostics,
//! a query built from such filters simply yields nothing.

use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("bound must be non-negative, got {0}")]
    NegativeBound(f64),

    #[error("contradictory {filter} bounds: min {min} is greater than max {max}")]
    ContradictoryBounds {
        filter: &'static str,
        min: String,
        max: String,
    },
}

impl FilterError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::InvalidDate(_) => "NEO_FILTER_INVALID_DATE",
            FilterError::InvalidNumber(_) => "NEO_FILTER_INVALID_NUMBER",
            FilterError::NegativeBound(_) => "NEO_FILTER_NEGATIVE_BOUND",
            FilterError::ContradictoryBounds { .. } => "NEO_FILTER_CONTRADICTORY_BOUNDS",
        }
    }

    /// Usage errors do not prevent a query from running
    pub fn is_usage_error(&self) -> bool {
        matches!(self, FilterError::ContradictoryBounds { .. })
    }
}
