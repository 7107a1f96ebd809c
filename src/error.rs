//! Error types for the runproj CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for runproj operations.
///
/// Exit-code failures of the launched child are not errors; they are reported
/// as [`crate::launch::Outcome`] values. Only conditions that prevent a
/// meaningful outcome end up here.
#[derive(Error, Debug)]
pub enum RunError {
    /// User provided invalid arguments, configuration, or paths.
    #[error("{0}")]
    UserError(String),

    /// The runtime executable could not be started. Never retried.
    #[error(
        "failed to spawn '{program}': {source}\nFix: ensure the runtime is installed and in PATH, or set runtime.program in the config."
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The preparation child ran but did not exit cleanly.
    #[error("preparing project '{project}' failed with exit code {code}")]
    PrepareFailed { project: String, code: i32 },
}

impl RunError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::UserError(_) => exit_codes::USER_ERROR,
            RunError::Spawn { .. } => exit_codes::SPAWN_FAILURE,
            RunError::PrepareFailed { .. } => exit_codes::PREPARE_FAILURE,
        }
    }
}

/// Result type alias for runproj operations.
pub type Result<T> = std::result::Result<T, RunError>;
