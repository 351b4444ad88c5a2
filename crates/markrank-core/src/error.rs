//! Error types and exit codes for markrank
//!
//! Exit codes:
//! - 0: Success (including a graceful stop after an input file could not be opened)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed number, malformed row in strict mode, zero max score)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for markrank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - input content could not be interpreted (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while ranking
#[derive(Error, Debug)]
pub enum MarkrankError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("could not convert string to float in {source_name} line {line}: {value:?}")]
    InvalidNumber {
        source_name: String,
        line: usize,
        value: String,
    },

    #[error("malformed row in {source_name} line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("division by zero: unit {unit:?} has a max score of 0 (records line {line})")]
    ZeroMaxScore { unit: String, line: usize },

    // Generic failures (exit code 1)
    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

}

impl MarkrankError {
    /// Create an error for a token that does not parse as a number
    pub fn invalid_number(source_name: &str, line: usize, value: impl std::fmt::Display) -> Self {
        MarkrankError::InvalidNumber {
            source_name: source_name.to_string(),
            line,
            value: value.to_string(),
        }
    }

    /// Create an error for a row with the wrong number of fields
    pub fn malformed_row(source_name: &str, line: usize, expected: usize, found: usize) -> Self {
        MarkrankError::MalformedRow {
            source_name: source_name.to_string(),
            line,
            expected,
            found,
        }
    }

    /// Create an error for a config file that could not be read or parsed
    pub fn invalid_config(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        MarkrankError::InvalidConfig {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MarkrankError::UnknownFormat(_) | MarkrankError::UsageError(_) => ExitCode::Usage,

            MarkrankError::InvalidNumber { .. }
            | MarkrankError::MalformedRow { .. }
            | MarkrankError::ZeroMaxScore { .. } => ExitCode::Data,

            MarkrankError::InvalidConfig { .. }
            | MarkrankError::Io(_)
            | MarkrankError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MarkrankError::UnknownFormat(_) => "unknown_format",
            MarkrankError::UsageError(_) => "usage_error",
            MarkrankError::InvalidNumber { .. } => "invalid_number",
            MarkrankError::MalformedRow { .. } => "malformed_row",
            MarkrankError::ZeroMaxScore { .. } => "zero_max_score",
            MarkrankError::InvalidConfig { .. } => "invalid_config",
            MarkrankError::Io(_) => "io_error",
            MarkrankError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for markrank operations
pub type Result<T> = std::result::Result<T, MarkrankError>;
