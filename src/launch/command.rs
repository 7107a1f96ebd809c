//! Translation of a resolved launch into a concrete command line.

use super::model::LaunchConfig;
use crate::config::RuntimeConfig;
use crate::error::{Result, RunError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

/// Program, arguments and environment overrides for one child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Variables set on top of the inherited environment.
    pub env: BTreeMap<String, String>,
}

impl CommandLine {
    /// Command line that runs `config.script` in `config.target_path`.
    ///
    /// Argument order: project, startup flags, `runtime.extra_args`, script.
    pub fn for_launch(config: &LaunchConfig, runtime: &RuntimeConfig) -> Result<Self> {
        let mut args = vec![project_arg(&config.target_path)];

        if config.fast_mode {
            args.push("--compile=min".to_string());
        }
        if let Some(value) = config.compiled_modules.flag_value() {
            args.push(format!("--compiled-modules={}", value));
        }
        if let Some(value) = config.code_coverage.flag_value() {
            let mode = if value == "yes" { "user" } else { "none" };
            args.push(format!("--code-coverage={}", mode));
        }
        if let Some(value) = config.check_bounds.flag_value() {
            args.push(format!("--check-bounds={}", value));
        }
        if let Some(value) = config.depwarn.flag_value() {
            args.push(format!("--depwarn={}", value));
        }

        args.extend(extra_args(runtime)?);
        args.push(config.script.to_string_lossy().into_owned());

        Ok(Self {
            program: runtime.program.clone(),
            args,
            env: child_env(runtime, config.strict_load_path),
        })
    }

    /// Command line that evaluates `program` inside `project`.
    pub fn for_eval(
        project: &Path,
        program: &str,
        strict_load_path: bool,
        runtime: &RuntimeConfig,
    ) -> Result<Self> {
        let mut args = vec![project_arg(project)];
        args.extend(extra_args(runtime)?);
        args.push("-e".to_string());
        args.push(program.to_string());

        Ok(Self {
            program: runtime.program.clone(),
            args,
            env: child_env(runtime, strict_load_path),
        })
    }

    /// Human-readable form, environment assignments first.
    pub fn display(&self) -> String {
        let mut words: Vec<String> = self
            .env
            .iter()
            .map(|(k, v)| format!("{}={}", k, shell_words::quote(v)))
            .collect();
        words.push(shell_words::quote(&self.program).into_owned());
        words.extend(self.args.iter().map(|a| shell_words::quote(a).into_owned()));
        words.join(" ")
    }

    /// Build the `std::process::Command`; stdio is inherited.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command
    }
}

fn project_arg(project: &Path) -> String {
    format!("--project={}", project.display())
}

fn extra_args(runtime: &RuntimeConfig) -> Result<Vec<String>> {
    runtime.extra_argv().map_err(|e| {
        RunError::UserError(format!(
            "failed to parse runtime.extra_args '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            runtime.extra_args, e
        ))
    })
}

fn child_env(runtime: &RuntimeConfig, strict_load_path: bool) -> BTreeMap<String, String> {
    let mut env = runtime.environment.clone();
    if strict_load_path {
        env.insert(
            runtime.load_path_var.clone(),
            runtime.strict_load_path_value.clone(),
        );
    }
    env
}
