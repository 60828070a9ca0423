//! Database construction errors
//!
//! Error codes:
//! - NEO_DATA_INTEGRITY: duplicate designation among NEOs
//! - NEO_DANGLING_REFERENCE: approach names an unknown designation
//!
//! Both are raised eagerly while building the database. Lookups and
//! queries on a constructed database never fail.

use thiserror::Error;

/// Result type for database construction
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Referential integrity violations found while linking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    #[error("duplicate NEO designation '{designation}'")]
    DataIntegrity { designation: String },

    #[error("close approach #{approach} references unknown designation '{designation}'")]
    DanglingReference { designation: String, approach: usize },
}

impl DatabaseError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DatabaseError::DataIntegrity { .. } => "NEO_DATA_INTEGRITY",
            DatabaseError::DanglingReference { .. } => "NEO_DANGLING_REFERENCE",
        }
    }

    /// The designation that failed to link
    pub fn designation(&self) -> &str {
        match self {
            DatabaseError::DataIntegrity { designation }
            | DatabaseError::DanglingReference { designation, .. } => designation,
        }
    }
}
