//! Error types and exit codes for bertha
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, persistence)
//! - 2: Usage error (bad flags/args, no current submission)
//! - 3: Data error (bad rubric, corrupt state file, missing submission root)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the bertha binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad rubric or state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while marking
#[derive(Error, Debug)]
pub enum BerthaError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("no submission is currently selected")]
    NoSelection,

    #[error("no criterion {reference} in the rubric")]
    UnknownCriterion { reference: String },

    // Data errors (exit code 3)
    #[error("invalid rubric definition: {reason}")]
    Definition { reason: String },

    #[error("marking state in {path:?} is unreadable: {reason}")]
    CorruptState { path: PathBuf, reason: String },

    #[error("submission root not found: {path:?}")]
    RootNotFound { path: PathBuf },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to write {path:?}: {reason}")]
    Persistence { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BerthaError {
    /// Create a rubric definition error
    pub fn definition(reason: impl std::fmt::Display) -> Self {
        BerthaError::Definition {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed write to the marking state or a feedback file
    pub fn persistence(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        BerthaError::Persistence {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a state file that exists but cannot be decoded
    pub fn corrupt_state(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        BerthaError::CorruptState {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BerthaError::UsageError(_)
            | BerthaError::NoSelection
            | BerthaError::UnknownCriterion { .. } => ExitCode::Usage,

            BerthaError::Definition { .. }
            | BerthaError::CorruptState { .. }
            | BerthaError::RootNotFound { .. }
            | BerthaError::InvalidConfig { .. } => ExitCode::Data,

            BerthaError::Persistence { .. }
            | BerthaError::Io(_)
            | BerthaError::Json(_)
            | BerthaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            BerthaError::UsageError(_) => "usage_error",
            BerthaError::NoSelection => "no_selection",
            BerthaError::UnknownCriterion { .. } => "unknown_criterion",
            BerthaError::Definition { .. } => "definition_error",
            BerthaError::CorruptState { .. } => "corrupt_state",
            BerthaError::RootNotFound { .. } => "root_not_found",
            BerthaError::InvalidConfig { .. } => "invalid_config",
            BerthaError::Persistence { .. } => "persistence_error",
            BerthaError::Io(_) => "io_error",
            BerthaError::Json(_) => "json_error",
            BerthaError::Other(_) => "other",
        }
    }

    /// Whether the marking loop can carry on after this error. Only the
    /// startup failures (bad rubric, state, root or config) are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BerthaError::Definition { .. }
                | BerthaError::CorruptState { .. }
                | BerthaError::RootNotFound { .. }
                | BerthaError::InvalidConfig { .. }
        )
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

/// Result type alias for bertha operations
pub type Result<T> = std::result::Result<T, BerthaError>;
