//! Caller-facing launch options and the presets that seed them.
//!
//! Every recognized option is an `Option<_>`: `None` means "not given here",
//! so layers (command line, preset, config defaults) can be stacked with
//! [`LaunchOptions::over`] before resolution.

use crate::config::{Config, Depwarn, Toggle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keyword-style options for one launch.
///
/// | option             | default                          |
/// |--------------------|----------------------------------|
/// | `project`          | directory of the script          |
/// | `parent_project`   | parent directory of the project  |
/// | `fast`             | `false`                          |
/// | `prepare`          | `!fast`                          |
/// | `compiled_modules` | `inherit`                        |
/// | `precompile`       | `compiled_modules != no`         |
/// | `strict`           | `true`                           |
/// | `code_coverage`    | `no`                             |
/// | `check_bounds`     | `inherit`                        |
/// | `depwarn`          | `inherit`                        |
/// | `xfail`            | `false`                          |
/// | `exitcodes`        | empty                            |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiled_modules: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precompile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_coverage: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_bounds: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depwarn: Option<Depwarn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xfail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exitcodes: Option<Vec<i32>>,
}

impl LaunchOptions {
    /// Stack `self` on top of `base`; fields set in `self` win.
    pub fn over(self, base: LaunchOptions) -> LaunchOptions {
        LaunchOptions {
            project: self.project.or(base.project),
            parent_project: self.parent_project.or(base.parent_project),
            fast: self.fast.or(base.fast),
            prepare: self.prepare.or(base.prepare),
            compiled_modules: self.compiled_modules.or(base.compiled_modules),
            precompile: self.precompile.or(base.precompile),
            strict: self.strict.or(base.strict),
            code_coverage: self.code_coverage.or(base.code_coverage),
            check_bounds: self.check_bounds.or(base.check_bounds),
            depwarn: self.depwarn.or(base.depwarn),
            xfail: self.xfail.or(base.xfail),
            exitcodes: self.exitcodes.or(base.exitcodes),
        }
    }
}

/// What kind of entry point is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// An explicit script file.
    Script,
    /// The project's test suite.
    Test,
    /// The project's documentation build.
    Docs,
}

impl Preset {
    /// Options this preset sets on top of config defaults.
    pub fn defaults(self) -> LaunchOptions {
        match self {
            Preset::Test => LaunchOptions {
                code_coverage: Some(Toggle::Yes),
                check_bounds: Some(Toggle::Yes),
                depwarn: Some(Depwarn::Yes),
                ..LaunchOptions::default()
            },
            Preset::Script | Preset::Docs => LaunchOptions::default(),
        }
    }

    /// Path used when the caller gives none.
    pub fn default_path(self, config: &Config) -> Option<PathBuf> {
        match self {
            Preset::Script => None,
            Preset::Test => Some(PathBuf::from(&config.test_dir)),
            Preset::Docs => Some(PathBuf::from(&config.docs_dir)),
        }
    }

    /// Script run when the path is a directory.
    pub fn entry(self, config: &Config) -> Option<&str> {
        match self {
            Preset::Script => None,
            Preset::Test => Some(config.test_entry.as_str()),
            Preset::Docs => Some(config.docs_entry.as_str()),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Script => write!(f, "script"),
            Preset::Test => write!(f, "test"),
            Preset::Docs => write!(f, "docs"),
        }
    }
}
