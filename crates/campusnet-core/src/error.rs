//! Error types and exit codes for campusnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing node, unknown class, invalid config)

mod macros;

use thiserror::Error;

/// Exit codes for the campusnet binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, class or student (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campusnet operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CampusError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UsageError(_)
            | CampusError::InvalidValue { .. } => ExitCode::Usage,

            CampusError::NotFound { .. }
            | CampusError::AlreadyExists { .. }
            | CampusError::InvalidConfig { .. } => ExitCode::Data,

            CampusError::Io(_)
            | CampusError::Csv(_)
            | CampusError::Json(_)
            | CampusError::Toml(_)
            | CampusError::FailedOperationWithTarget { .. }
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidValue { .. } => "invalid_value",
            CampusError::NotFound { .. } => "not_found",
            CampusError::AlreadyExists { .. } => "already_exists",
            CampusError::InvalidConfig { .. } => "invalid_config",
            CampusError::Io(_) => "io_error",
            CampusError::Csv(_) => "csv_error",
            CampusError::Json(_) => "json_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CampusError::Other(_) => "other",
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

/// Result type alias for campusnet operations
pub type Result<T> = std::result::Result<T, CampusError>;
