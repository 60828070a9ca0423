//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit status. The code
//! of the underlying library error is kept in the message.

use std::fmt;
use std::io;

use crate::database::DatabaseError;
use crate::extract::ExtractError;
use crate::filters::FilterError;
use crate::write::WriteError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// A source dataset could not be loaded
    LoadFailed,
    /// Loaded data failed to link
    LinkFailed,
    /// Filter options are unusable
    InvalidFilter,
    /// Results could not be written
    WriteFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "NEO_CLI_CONFIG_ERROR",
            Self::IoError => "NEO_CLI_IO_ERROR",
            Self::LoadFailed => "NEO_CLI_LOAD_FAILED",
            Self::LinkFailed => "NEO_CLI_LINK_FAILED",
            Self::InvalidFilter => "NEO_CLI_INVALID_FILTER",
            Self::WriteFailed => "NEO_CLI_WRITE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ExtractError> for CliError {
    fn from(e: ExtractError) -> Self {
        Self::new(CliErrorCode::LoadFailed, format!("{} ({})", e, e.code()))
    }
}

impl From<DatabaseError> for CliError {
    fn from(e: DatabaseError) -> Self {
        Self::new(CliErrorCode::LinkFailed, format!("{} ({})", e, e.code()))
    }
}

impl From<FilterError> for CliError {
    fn from(e: FilterError) -> Self {
        Self::new(CliErrorCode::InvalidFilter, format!("{} ({})", e, e.code()))
    }
}

impl From<WriteError> for CliError {
    fn from(e: WriteError) -> Self {
        Self::new(CliErrorCode::WriteFailed, format!("{} ({})", e, e.code()))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
