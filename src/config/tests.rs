//! Tests for config functionality.

use crate::config::{Config, Depwarn, RuntimeConfig, Toggle};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.runtime.program, "julia");
    assert_eq!(config.runtime.load_path_var, "JULIA_LOAD_PATH");
    assert_eq!(config.runtime.strict_load_path_value, "@");
    assert!(config.runtime.extra_args.is_empty());
    assert!(config.runtime.environment.is_empty());
    assert_eq!(config.test_dir, "test");
    assert_eq!(config.test_entry, "runtests.jl");
    assert_eq!(config.docs_dir, "docs");
    assert_eq!(config.docs_entry, "make.jl");
    assert_eq!(config.defaults.fast, None);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
runtime:
  program: /opt/julia/bin/julia
test_entry: all.jl
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.runtime.program, "/opt/julia/bin/julia");
    assert_eq!(config.test_entry, "all.jl");

    // Unspecified values should use defaults
    assert_eq!(config.runtime.load_path_var, "JULIA_LOAD_PATH");
    assert_eq!(config.docs_entry, "make.jl");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
runtime:
  program: julia-1.10
  load_path_var: MY_LOAD_PATH
  strict_load_path_value: "@:@stdlib"
  extra_args: "--color=yes --startup-file=no"
  environment:
    CI: "true"
defaults:
  fast: true
  strict: false
  compiled_modules: "no"
  check_bounds: "yes"
  depwarn: error
  exitcodes: [0, 3]
test_dir: checks
test_entry: main.jl
docs_dir: documentation
docs_entry: build.jl
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.runtime.program, "julia-1.10");
    assert_eq!(config.runtime.load_path_var, "MY_LOAD_PATH");
    assert_eq!(config.runtime.strict_load_path_value, "@:@stdlib");
    assert_eq!(
        config.runtime.extra_argv().unwrap(),
        vec!["--color=yes", "--startup-file=no"]
    );
    assert_eq!(config.runtime.environment.get("CI").unwrap(), "true");
    assert_eq!(config.defaults.fast, Some(true));
    assert_eq!(config.defaults.strict, Some(false));
    assert_eq!(config.defaults.compiled_modules, Some(Toggle::No));
    assert_eq!(config.defaults.check_bounds, Some(Toggle::Yes));
    assert_eq!(config.defaults.depwarn, Some(Depwarn::Error));
    assert_eq!(config.defaults.exitcodes, Some(vec![0, 3]));
    assert_eq!(config.test_dir, "checks");
    assert_eq!(config.test_entry, "main.jl");
    assert_eq!(config.docs_dir, "documentation");
    assert_eq!(config.docs_entry, "build.jl");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
future_option: 42
runtime:
  program: julia
  something_new: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.runtime.program, "julia");
}

#[test]
fn test_validate_empty_program_fails() {
    let result = Config::from_yaml("runtime:\n  program: \"\"\n");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("runtime.program"));
}

#[test]
fn test_validate_load_path_var_with_equals_fails() {
    let result = Config::from_yaml("runtime:\n  load_path_var: \"A=B\"\n");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("load_path_var"));
}

#[test]
fn test_validate_unparseable_extra_args_fails() {
    let result = Config::from_yaml("runtime:\n  extra_args: \"--foo \\\"unterminated\"\n");

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("extra_args"));
    assert!(err.contains("Fix:"));
}

#[test]
fn test_validate_entry_with_separator_fails() {
    let result = Config::from_yaml("test_entry: sub/runtests.jl\n");

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("test_entry"));
    assert!(err.contains("bare file name"));
}

#[test]
fn test_validate_empty_docs_dir_fails() {
    let result = Config::from_yaml("docs_dir: \"\"\n");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("docs_dir"));
}

#[test]
fn test_invalid_toggle_value_is_parse_error() {
    let result = Config::from_yaml("defaults:\n  check_bounds: sometimes\n");

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to parse config YAML")
    );
}

#[test]
fn test_roundtrip_preserves_runtime() {
    let mut config = Config::default();
    config.runtime = RuntimeConfig {
        program: "julia".to_string(),
        extra_args: "--threads=4".to_string(),
        ..RuntimeConfig::default()
    };
    config.defaults.xfail = Some(true);

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_discover_prefers_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("explicit.yaml");
    let from_env = temp_dir.path().join("env.yaml");
    std::fs::write(&explicit, "test_entry: explicit.jl\n").unwrap();
    std::fs::write(&from_env, "test_entry: env.jl\n").unwrap();
    std::fs::write(temp_dir.path().join("runproj.yaml"), "test_entry: local.jl\n").unwrap();

    let config =
        Config::discover_from(Some(&explicit), Some(&from_env), temp_dir.path()).unwrap();
    assert_eq!(config.test_entry, "explicit.jl");

    let config = Config::discover_from(None, Some(&from_env), temp_dir.path()).unwrap();
    assert_eq!(config.test_entry, "env.jl");

    let config = Config::discover_from(None, None, temp_dir.path()).unwrap();
    assert_eq!(config.test_entry, "local.jl");
}

#[test]
fn test_discover_without_any_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::discover_from(None, None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_missing_explicit_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.yaml");

    let result = Config::discover_from(Some(&missing), None, temp_dir.path());
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to read config file")
    );
}

#[test]
fn test_toggle_from_str() {
    assert_eq!(Toggle::from_str("yes"), Some(Toggle::Yes));
    assert_eq!(Toggle::from_str("TRUE"), Some(Toggle::Yes));
    assert_eq!(Toggle::from_str("0"), Some(Toggle::No));
    assert_eq!(Toggle::from_str(" inherit "), Some(Toggle::Inherit));
    assert_eq!(Toggle::from_str("error"), None);
}

#[test]
fn test_depwarn_from_str() {
    assert_eq!(Depwarn::from_str("error"), Some(Depwarn::Error));
    assert_eq!(Depwarn::from_str("no"), Some(Depwarn::No));
    assert_eq!(Depwarn::from_str("loud"), None);
}

#[test]
fn test_or_session_only_replaces_inherit() {
    assert_eq!(Toggle::Inherit.or_session(Some(Toggle::No)), Toggle::No);
    assert_eq!(Toggle::Yes.or_session(Some(Toggle::No)), Toggle::Yes);
    assert_eq!(Toggle::Inherit.or_session(None), Toggle::Inherit);
    assert_eq!(Depwarn::Inherit.or_session(Some(Depwarn::Error)), Depwarn::Error);
    assert_eq!(Depwarn::No.or_session(Some(Depwarn::Error)), Depwarn::No);
}
