//! Classification of a finished child process.

use crate::exit_codes;
use std::collections::BTreeSet;

/// How a launch ended.
///
/// Spawn failures never reach this type; they are reported as
/// [`crate::error::RunError::Spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit code 0, or a code listed in the allowed set.
    Success { code: i32 },
    /// Non-zero exit accepted because failure was expected.
    ExpectedFailure { code: i32 },
    /// Non-zero exit that was not accepted.
    Failure { code: i32 },
}

impl Outcome {
    /// Classify `code`.
    ///
    /// A non-empty `allowed` set takes precedence over `expected_failure`.
    pub fn classify(code: i32, expected_failure: bool, allowed: &BTreeSet<i32>) -> Self {
        if code == 0 {
            Outcome::Success { code }
        } else if !allowed.is_empty() {
            if allowed.contains(&code) {
                Outcome::Success { code }
            } else {
                Outcome::Failure { code }
            }
        } else if expected_failure {
            Outcome::ExpectedFailure { code }
        } else {
            Outcome::Failure { code }
        }
    }

    /// Whether the caller should treat this as a pass.
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failure { .. })
    }

    /// Exit code for the runproj process itself.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::CHILD_FAILURE
        }
    }
}
