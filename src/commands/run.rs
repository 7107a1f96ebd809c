//! Implementation of the `script`, `test` and `docs` commands.

use crate::cli::LaunchArgs;
use crate::config::Config;
use crate::error::{Result, RunError};
use crate::exit_codes;
use crate::launch::{
    Ambient, CommandLine, LaunchConfig, Outcome, Preset, launch, resolve_target,
};
use crate::prepare::{PrepareRequest, prepare_command};
use serde::Serialize;
use std::path::PathBuf;

/// Execute a launching command.
///
/// # Exit Codes
///
/// - 0: Child exited 0, with an allowed code, or failed as expected
/// - 1: User error (bad path, config, or session value)
/// - 2: Child exited with an unaccepted code
/// - 3: Runtime could not be spawned
/// - 4: Preparation failed
pub fn cmd_run(
    preset: Preset,
    path: Option<PathBuf>,
    args: &LaunchArgs,
    config: &Config,
) -> Result<i32> {
    let ambient = Ambient::from_env()?;
    let launch_config = resolve_launch(preset, path, args, config, &ambient)?;

    if args.dry_run {
        println!("{}", render_plan(&launch_config, config, args.json)?);
        return Ok(exit_codes::SUCCESS);
    }

    let outcome = launch(&launch_config, &config.runtime)?;
    if let Outcome::Failure { code } = outcome {
        eprintln!(
            "{} failed: '{}' exited with code {}",
            preset,
            launch_config.script.display(),
            code
        );
    }

    Ok(outcome.exit_code())
}

/// Layer options (command line, preset, config defaults) and resolve them.
pub fn resolve_launch(
    preset: Preset,
    path: Option<PathBuf>,
    args: &LaunchArgs,
    config: &Config,
    ambient: &Ambient,
) -> Result<LaunchConfig> {
    let path = path
        .or_else(|| preset.default_path(config))
        .ok_or_else(|| RunError::UserError(format!("{} requires a path", preset)))?;

    let options = args
        .to_options()
        .over(preset.defaults())
        .over(config.defaults.clone());

    let target = resolve_target(&path, preset.entry(config), options.project.as_deref())?;
    Ok(LaunchConfig::resolve(target, options, ambient))
}

#[derive(Serialize)]
struct Plan<'a> {
    config: &'a LaunchConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    prepare: Option<CommandLine>,
    command: CommandLine,
}

/// Describe what a launch would run, as text or JSON.
pub fn render_plan(launch_config: &LaunchConfig, config: &Config, json: bool) -> Result<String> {
    let prepare = if launch_config.prepare_first {
        Some(prepare_command(
            &PrepareRequest {
                project: launch_config.target_path.clone(),
                precompile: launch_config.precompile,
                parent_project: launch_config.parent_project.clone(),
                strict_load_path: launch_config.strict_load_path,
            },
            &config.runtime,
        )?)
    } else {
        None
    };
    let command = CommandLine::for_launch(launch_config, &config.runtime)?;

    if json {
        let plan = Plan {
            config: launch_config,
            prepare,
            command,
        };
        return serde_json::to_string_pretty(&plan)
            .map_err(|e| RunError::UserError(format!("failed to serialize plan: {}", e)));
    }

    let mut lines = Vec::new();
    if let Some(prepare) = prepare {
        lines.push(format!("prepare: {}", prepare.display()));
    }
    lines.push(format!("run:     {}", command.display()));
    Ok(lines.join("\n"))
}
