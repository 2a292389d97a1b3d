//! Error types and exit codes for farepath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph documents, invalid config, etc.)
//!
//! Note that router-level outcomes (unknown city, unreachable destination,
//! negative cycle, unsatisfiable constraints) are *not* errors of this type.
//! They are returned as tagged values inside `RouteResult` so callers can
//! branch on them uniformly.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 2,
    Data = 3,
}

#[derive(Error, Debug)]
pub enum FarepathError {
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("graph document not found: {path} (run `farepath build` first)")]
    GraphNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl FarepathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FarepathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FarepathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        FarepathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            FarepathError::UnknownFormat(_)
            | FarepathError::UsageError(_)
            | FarepathError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            FarepathError::GraphNotFound { .. } | FarepathError::NotFound { .. } => ExitCode::Data,

            // Generic failures
            FarepathError::Io(_)
            | FarepathError::Json(_)
            | FarepathError::Csv(_)
            | FarepathError::Toml(_)
            | FarepathError::FailedOperation { .. }
            | FarepathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FarepathError::UnknownFormat(_) => "unknown_format",
            FarepathError::UsageError(_) => "usage_error",
            FarepathError::GraphNotFound { .. } => "graph_not_found",
            FarepathError::Io(_) => "io_error",
            FarepathError::Json(_) => "json_error",
            FarepathError::Csv(_) => "csv_error",
            FarepathError::Toml(_) => "toml_error",
            FarepathError::InvalidValue { .. } => "invalid_value",
            FarepathError::NotFound { .. } => "not_found",
            FarepathError::FailedOperation { .. } => "failed_operation",
            FarepathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for farepath operations
pub type Result<T> = std::result::Result<T, FarepathError>;
