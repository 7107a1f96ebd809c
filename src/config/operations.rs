//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{RunError, Result};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "runproj.yaml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "RUNPROJ_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RunError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Locate and load the active config.
    ///
    /// Order: `explicit` path, then `$RUNPROJ_CONFIG`, then `runproj.yaml`
    /// in the current directory, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            RunError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

        Self::discover_from(explicit, from_env.as_deref(), &cwd)
    }

    /// Same as [`Config::discover`] with the environment lookup and working
    /// directory supplied by the caller.
    pub fn discover_from(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self> {
        if let Some(path) = explicit.or(from_env).filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let local = cwd.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "loading config");
            return Self::load(local);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RunError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `runtime.program` and `runtime.load_path_var` must be non-empty
    /// - `runtime.load_path_var` must not contain `=`
    /// - `runtime.extra_args` must parse as shell words
    /// - preset directories must be non-empty
    /// - preset entries must be bare file names
    pub fn validate(&self) -> Result<()> {
        if self.runtime.program.trim().is_empty() {
            return Err(RunError::UserError(
                "config validation failed: runtime.program must be non-empty".to_string(),
            ));
        }

        let var = &self.runtime.load_path_var;
        if var.trim().is_empty() || var.contains('=') {
            return Err(RunError::UserError(format!(
                "config validation failed: runtime.load_path_var '{}' is not a valid variable name",
                var
            )));
        }

        if let Err(e) = self.runtime.extra_argv() {
            return Err(RunError::UserError(format!(
                "config validation failed: runtime.extra_args cannot be parsed: {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                e
            )));
        }

        for (key, dir) in [("test_dir", &self.test_dir), ("docs_dir", &self.docs_dir)] {
            if dir.trim().is_empty() {
                return Err(RunError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    key
                )));
            }
        }

        for (key, entry) in [
            ("test_entry", &self.test_entry),
            ("docs_entry", &self.docs_entry),
        ] {
            if entry.trim().is_empty() || entry.contains('/') || entry.contains('\\') {
                return Err(RunError::UserError(format!(
                    "config validation failed: {} must be a bare file name (found '{}')",
                    key, entry
                )));
            }
        }

        Ok(())
    }
}
