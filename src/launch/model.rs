//! The fully resolved launch configuration.

use super::ambient::Ambient;
use super::options::LaunchOptions;
use super::precedence::plan_startup;
use super::target::Target;
use crate::config::{Depwarn, Toggle};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Resolved options for one subprocess invocation.
///
/// Built once per invocation and not modified afterwards. Tri-states still
/// `Inherit` here had no session value and are not forwarded to the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    /// Project whose environment is activated.
    pub target_path: PathBuf,
    /// Script executed by the child.
    pub script: PathBuf,
    /// Project developed into `target_path` when it has no manifest yet.
    pub parent_project: Option<PathBuf>,
    pub fast_mode: bool,
    pub prepare_first: bool,
    pub precompile: bool,
    pub compiled_modules: Toggle,
    pub strict_load_path: bool,
    pub code_coverage: Toggle,
    pub check_bounds: Toggle,
    pub depwarn: Depwarn,
    /// Treat any non-zero exit as success (ignored when `allowed_exit_codes`
    /// is non-empty).
    pub expected_failure: bool,
    pub allowed_exit_codes: BTreeSet<i32>,
}

impl LaunchConfig {
    /// Resolve layered `options` against the session state in `ambient`.
    pub fn resolve(target: Target, options: LaunchOptions, ambient: &Ambient) -> Self {
        let compiled_modules = options
            .compiled_modules
            .unwrap_or_default()
            .or_session(ambient.compiled_modules);

        let startup = plan_startup(
            options.fast,
            options.prepare,
            options.precompile,
            compiled_modules,
        );

        Self {
            target_path: target.project,
            script: target.script,
            parent_project: options.parent_project,
            fast_mode: startup.compile_min,
            prepare_first: startup.prepare,
            precompile: startup.precompile,
            compiled_modules,
            strict_load_path: options.strict.unwrap_or(true),
            code_coverage: options
                .code_coverage
                .unwrap_or(Toggle::No)
                .or_session(ambient.code_coverage),
            check_bounds: options
                .check_bounds
                .unwrap_or_default()
                .or_session(ambient.check_bounds),
            depwarn: options
                .depwarn
                .unwrap_or_default()
                .or_session(ambient.depwarn),
            expected_failure: options.xfail.unwrap_or(false),
            allowed_exit_codes: options.exitcodes.unwrap_or_default().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target {
            project: PathBuf::from("test"),
            script: PathBuf::from("test/runtests.jl"),
        }
    }

    #[test]
    fn builtin_defaults() {
        let config = LaunchConfig::resolve(target(), LaunchOptions::default(), &Ambient::default());

        assert_eq!(config.target_path, PathBuf::from("test"));
        assert_eq!(config.script, PathBuf::from("test/runtests.jl"));
        assert!(!config.fast_mode);
        assert!(config.prepare_first);
        assert!(config.precompile);
        assert_eq!(config.compiled_modules, Toggle::Inherit);
        assert!(config.strict_load_path);
        assert_eq!(config.code_coverage, Toggle::No);
        assert_eq!(config.check_bounds, Toggle::Inherit);
        assert_eq!(config.depwarn, Depwarn::Inherit);
        assert!(!config.expected_failure);
        assert!(config.allowed_exit_codes.is_empty());
    }

    #[test]
    fn inherited_flags_take_session_values() {
        let ambient = Ambient {
            compiled_modules: Some(Toggle::No),
            check_bounds: Some(Toggle::No),
            code_coverage: Some(Toggle::Yes),
            depwarn: Some(Depwarn::Error),
        };

        let config = LaunchConfig::resolve(target(), LaunchOptions::default(), &ambient);

        assert_eq!(config.compiled_modules, Toggle::No);
        assert_eq!(config.check_bounds, Toggle::No);
        assert_eq!(config.depwarn, Depwarn::Error);
        // code_coverage defaults to an explicit `no`, not to inherit.
        assert_eq!(config.code_coverage, Toggle::No);
        // Session compiled-modules=no disables precompilation.
        assert!(config.prepare_first);
        assert!(!config.precompile);
    }

    #[test]
    fn explicit_inherit_takes_session_value() {
        let options = LaunchOptions {
            code_coverage: Some(Toggle::Inherit),
            ..LaunchOptions::default()
        };
        let ambient = Ambient {
            code_coverage: Some(Toggle::Yes),
            ..Ambient::default()
        };

        let config = LaunchConfig::resolve(target(), options, &ambient);
        assert_eq!(config.code_coverage, Toggle::Yes);
    }

    #[test]
    fn explicit_values_beat_session() {
        let options = LaunchOptions {
            check_bounds: Some(Toggle::Yes),
            depwarn: Some(Depwarn::No),
            ..LaunchOptions::default()
        };
        let ambient = Ambient {
            check_bounds: Some(Toggle::No),
            depwarn: Some(Depwarn::Error),
            ..Ambient::default()
        };

        let config = LaunchConfig::resolve(target(), options, &ambient);
        assert_eq!(config.check_bounds, Toggle::Yes);
        assert_eq!(config.depwarn, Depwarn::No);
    }

    #[test]
    fn exit_codes_are_deduplicated() {
        let options = LaunchOptions {
            xfail: Some(true),
            exitcodes: Some(vec![3, 2, 3]),
            ..LaunchOptions::default()
        };

        let config = LaunchConfig::resolve(target(), options, &Ambient::default());
        assert!(config.expected_failure);
        assert_eq!(
            config.allowed_exit_codes.into_iter().collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn fast_mode_skips_preparation() {
        let options = LaunchOptions {
            fast: Some(true),
            ..LaunchOptions::default()
        };

        let config = LaunchConfig::resolve(target(), options, &Ambient::default());
        assert!(config.fast_mode);
        assert!(!config.prepare_first);
        assert!(!config.precompile);
    }
}
