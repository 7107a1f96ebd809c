//! Implementation of the `prepare`, `prepare-test` and `prepare-docs` commands.

use crate::cli::PrepareFlags;
use crate::config::{Config, Toggle};
use crate::error::{Result, RunError};
use crate::exit_codes;
use crate::launch::{Ambient, Preset};
use crate::prepare::{PrepareRequest, prepare_command, prepare_project};
use std::path::PathBuf;

/// Prepare an explicit project directory, or the preset's default one.
pub fn cmd_prepare(
    preset: Preset,
    path: Option<PathBuf>,
    flags: &PrepareFlags,
    config: &Config,
) -> Result<i32> {
    let ambient = Ambient::from_env()?;
    let request = build_request(preset, path, flags, config, &ambient)?;

    if flags.dry_run {
        println!("prepare: {}", prepare_command(&request, &config.runtime)?.display());
        return Ok(exit_codes::SUCCESS);
    }

    prepare_project(&request, &config.runtime)?;
    Ok(exit_codes::SUCCESS)
}

/// Resolve flags and config defaults into a [`PrepareRequest`].
///
/// Precompilation is off when declined on the command line, in config
/// defaults, or when compiled modules are disabled.
pub fn build_request(
    preset: Preset,
    path: Option<PathBuf>,
    flags: &PrepareFlags,
    config: &Config,
    ambient: &Ambient,
) -> Result<PrepareRequest> {
    let project = path
        .or_else(|| preset.default_path(config))
        .ok_or_else(|| RunError::UserError("prepare requires a project path".to_string()))?;

    let defaults = &config.defaults;
    let compiled_modules = defaults
        .compiled_modules
        .unwrap_or_default()
        .or_session(ambient.compiled_modules);

    Ok(PrepareRequest {
        project,
        precompile: !flags.no_precompile
            && defaults.precompile != Some(false)
            && compiled_modules != Toggle::No,
        parent_project: flags
            .parent_project
            .clone()
            .or_else(|| defaults.parent_project.clone()),
        strict_load_path: flags.strict.or(defaults.strict).unwrap_or(true),
    })
}
