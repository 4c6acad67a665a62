//! Error types and exit codes for pareto
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Data error (invalid costs, unknown nodes, dimension mismatches)

mod macros;

use thiserror::Error;

/// Exit codes for the pareto CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or cost data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for ParetoError {
    fn from(err: rusqlite::Error) -> Self {
        ParetoError::Other(err.to_string())
    }
}

/// Errors that can occur during pareto operations
#[derive(Error, Debug)]
pub enum ParetoError {
    // Search core errors (exit code 3)
    #[error("invalid cost: {reason}")]
    InvalidCost { reason: String },

    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("pop from an empty expansion queue")]
    EmptyQueue,

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ParetoError {
    /// Create an invalid cost error
    pub fn invalid_cost(reason: impl Into<String>) -> Self {
        ParetoError::InvalidCost {
            reason: reason.into(),
        }
    }

    /// Create an unknown node error
    pub fn unknown_node(id: impl Into<String>) -> Self {
        ParetoError::UnknownNode { id: id.into() }
    }

    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        ParetoError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ParetoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ParetoError::UnknownFormat(_)
            | ParetoError::UsageError(_)
            | ParetoError::InvalidValue { .. } => ExitCode::Usage,

            ParetoError::InvalidCost { .. }
            | ParetoError::DimensionMismatch { .. }
            | ParetoError::UnknownNode { .. }
            | ParetoError::EdgeNotFound { .. } => ExitCode::Data,

            ParetoError::EmptyQueue
            | ParetoError::Io(_)
            | ParetoError::Json(_)
            | ParetoError::Toml(_)
            | ParetoError::FailedOperation { .. }
            | ParetoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ParetoError::InvalidCost { .. } => "invalid_cost",
            ParetoError::DimensionMismatch { .. } => "dimension_mismatch",
            ParetoError::EmptyQueue => "empty_queue",
            ParetoError::UnknownNode { .. } => "unknown_node",
            ParetoError::EdgeNotFound { .. } => "edge_not_found",
            ParetoError::UnknownFormat(_) => "unknown_format",
            ParetoError::UsageError(_) => "usage_error",
            ParetoError::InvalidValue { .. } => "invalid_value",
            ParetoError::Io(_) => "io_error",
            ParetoError::Json(_) => "json_error",
            ParetoError::Toml(_) => "toml_error",
            ParetoError::FailedOperation { .. } => "failed_operation",
            ParetoError::Other(_) => "other",
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

/// Result type alias for pareto operations
pub type Result<T> = std::result::Result<T, ParetoError>;
