//! Config struct definition and default implementation.

use super::types::*;
use crate::launch::LaunchOptions;
use serde::{Deserialize, Serialize};

/// Configuration for runproj.
///
/// This struct represents the contents of `runproj.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the runtime is invoked.
    pub runtime: RuntimeConfig,

    /// Option layer applied underneath command-line options.
    pub defaults: LaunchOptions,

    // =========================================================================
    // Presets
    // =========================================================================
    /// Directory used by `test` and `prepare-test` when no path is given.
    #[serde(default = "default_test_dir")]
    pub test_dir: String,

    /// Entry script run by `test` when given a directory.
    #[serde(default = "default_test_entry")]
    pub test_entry: String,

    /// Directory used by `docs` and `prepare-docs` when no path is given.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Entry script run by `docs` when given a directory.
    #[serde(default = "default_docs_entry")]
    pub docs_entry: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            defaults: LaunchOptions::default(),
            test_dir: default_test_dir(),
            test_entry: default_test_entry(),
            docs_dir: default_docs_dir(),
            docs_entry: default_docs_entry(),
        }
    }
}
