//! Configuration types and defaults for runproj.
//!
//! This module defines the tri-state flag enums, the runtime profile, and the
//! default value functions used by the Config struct.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tri-state flag forwarded to the runtime.
///
/// `Inherit` means "use whatever the current session uses"; if the session
/// does not say, the flag is not forwarded at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Yes,
    No,
    #[default]
    Inherit,
}

impl Toggle {
    /// Parse a toggle from a string.
    ///
    /// Accepts `yes`/`no`/`inherit` plus the boolean spellings
    /// `true`/`false`/`1`/`0`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => Some(Self::Yes),
            "no" | "false" | "0" => Some(Self::No),
            "inherit" => Some(Self::Inherit),
            _ => None,
        }
    }

    /// Replace `Inherit` with the session value, if there is one.
    pub fn or_session(self, session: Option<Toggle>) -> Self {
        match (self, session) {
            (Self::Inherit, Some(value)) => value,
            (value, _) => value,
        }
    }

    /// The `yes`/`no` token for the command line, `None` when inherited.
    pub fn flag_value(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("yes"),
            Self::No => Some("no"),
            Self::Inherit => None,
        }
    }
}

/// Deprecation warning mode forwarded as `--depwarn=<mode>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Depwarn {
    Yes,
    No,
    /// Turn deprecation warnings into errors.
    Error,
    #[default]
    Inherit,
}

impl Depwarn {
    /// Parse a depwarn mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => Some(Self::Yes),
            "no" | "false" | "0" => Some(Self::No),
            "error" => Some(Self::Error),
            "inherit" => Some(Self::Inherit),
            _ => None,
        }
    }

    pub fn or_session(self, session: Option<Depwarn>) -> Self {
        match (self, session) {
            (Self::Inherit, Some(value)) => value,
            (value, _) => value,
        }
    }

    pub fn flag_value(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("yes"),
            Self::No => Some("no"),
            Self::Error => Some("error"),
            Self::Inherit => None,
        }
    }
}

/// How to invoke the language runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Runtime executable (looked up in PATH when not absolute).
    pub program: String,

    /// Environment variable that controls module/environment resolution.
    pub load_path_var: String,

    /// Value of `load_path_var` that restricts resolution to the active project.
    pub strict_load_path_value: String,

    /// Extra arguments inserted before the script (shell-words parsed; no shell).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra_args: String,

    /// Variables merged into the child environment.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            load_path_var: default_load_path_var(),
            strict_load_path_value: default_strict_load_path_value(),
            extra_args: String::new(),
            environment: BTreeMap::new(),
        }
    }
}

impl RuntimeConfig {
    /// Parse `extra_args` into an argv fragment.
    pub fn extra_argv(&self) -> Result<Vec<String>, shell_words::ParseError> {
        shell_words::split(&self.extra_args)
    }
}

// Default value functions for serde
pub(crate) fn default_program() -> String {
    "julia".to_string()
}
pub(crate) fn default_load_path_var() -> String {
    "JULIA_LOAD_PATH".to_string()
}
pub(crate) fn default_strict_load_path_value() -> String {
    "@".to_string()
}
pub(crate) fn default_test_dir() -> String {
    "test".to_string()
}
pub(crate) fn default_test_entry() -> String {
    "runtests.jl".to_string()
}
pub(crate) fn default_docs_dir() -> String {
    "docs".to_string()
}
pub(crate) fn default_docs_entry() -> String {
    "make.jl".to_string()
}
