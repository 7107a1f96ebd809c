//! Launch execution.
//!
//! Spawns one child with inherited stdio, blocks until it exits, and
//! classifies the exit code.

use super::command::CommandLine;
use super::model::LaunchConfig;
use super::outcome::Outcome;
use crate::config::RuntimeConfig;
use crate::error::{Result, RunError};
use crate::prepare::{PrepareRequest, prepare_project};
use std::process::ExitStatus;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run the launch described by `config`.
///
/// Runs the preparation step first when `config.prepare_first` is set. A
/// spawn failure is returned as an error and never retried; every exit code
/// is returned as an [`Outcome`].
pub fn launch(config: &LaunchConfig, runtime: &RuntimeConfig) -> Result<Outcome> {
    if config.prepare_first {
        prepare_project(
            &PrepareRequest {
                project: config.target_path.clone(),
                precompile: config.precompile,
                parent_project: config.parent_project.clone(),
                strict_load_path: config.strict_load_path,
            },
            runtime,
        )?;
    }

    let command = CommandLine::for_launch(config, runtime)?;
    info!(
        program = %command.program,
        project = %config.target_path.display(),
        script = %config.script.display(),
        "launching"
    );

    let code = run_to_exit(&command)?;
    let outcome = Outcome::classify(code, config.expected_failure, &config.allowed_exit_codes);

    match outcome {
        Outcome::Success { .. } => info!(code, "child finished"),
        Outcome::ExpectedFailure { .. } => info!(code, "child failed as expected"),
        Outcome::Failure { .. } => warn!(code, "child failed"),
    }

    Ok(outcome)
}

/// Spawn `command`, wait for it, and return its exit code.
pub fn run_to_exit(command: &CommandLine) -> Result<i32> {
    debug!(command = %command.display(), "spawning");

    let start = Instant::now();
    let status = command
        .to_command()
        .status()
        .map_err(|source| RunError::Spawn {
            program: command.program.clone(),
            source,
        })?;

    let code = exit_code_of(status);
    debug!(code, elapsed_ms = start.elapsed().as_millis() as u64, "child exited");
    Ok(code)
}

/// Exit code of `status`; signal deaths map to `128 + signal` like a shell.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
