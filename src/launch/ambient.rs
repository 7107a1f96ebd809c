//! Ambient session state.
//!
//! Flags left as `inherit` take the value the surrounding session was started
//! with. That state is read once, here, into an [`Ambient`] value; nothing in
//! the launch path reads the environment directly.

use crate::config::{Depwarn, Toggle};
use crate::error::{Result, RunError};

pub const COMPILED_MODULES_VAR: &str = "RUNPROJ_COMPILED_MODULES";
pub const CHECK_BOUNDS_VAR: &str = "RUNPROJ_CHECK_BOUNDS";
pub const CODE_COVERAGE_VAR: &str = "RUNPROJ_CODE_COVERAGE";
pub const DEPWARN_VAR: &str = "RUNPROJ_DEPWARN";

/// Session-level values for inheritable flags. `None` means the session
/// does not specify one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ambient {
    pub compiled_modules: Option<Toggle>,
    pub check_bounds: Option<Toggle>,
    pub code_coverage: Option<Toggle>,
    pub depwarn: Option<Depwarn>,
}

impl Ambient {
    /// Read session values from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read session values through `lookup`.
    ///
    /// Empty values and `inherit` count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let toggle = |key: &str| -> Result<Option<Toggle>> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                None => Ok(None),
                Some(raw) => match Toggle::from_str(&raw) {
                    Some(Toggle::Inherit) => Ok(None),
                    Some(value) => Ok(Some(value)),
                    None => Err(invalid(key, &raw, "yes, no, true, false, 1, 0")),
                },
            }
        };

        let depwarn = match lookup(DEPWARN_VAR).filter(|v| !v.trim().is_empty()) {
            None => None,
            Some(raw) => match Depwarn::from_str(&raw) {
                Some(Depwarn::Inherit) => None,
                Some(value) => Some(value),
                None => return Err(invalid(DEPWARN_VAR, &raw, "yes, no, error")),
            },
        };

        Ok(Self {
            compiled_modules: toggle(COMPILED_MODULES_VAR)?,
            check_bounds: toggle(CHECK_BOUNDS_VAR)?,
            code_coverage: toggle(CODE_COVERAGE_VAR)?,
            depwarn,
        })
    }
}

fn invalid(key: &str, raw: &str, expected: &str) -> RunError {
    RunError::UserError(format!(
        "invalid value '{}' for {}\nFix: use one of: {}.",
        raw, key, expected
    ))
}
