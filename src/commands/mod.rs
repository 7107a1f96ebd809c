//! Command implementations for runproj.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod prepare;
mod run;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::launch::Preset;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code on completion; errors carry their own.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<i32> {
    let config = Config::discover(config_path)?;

    match command {
        Command::Script(args) => {
            run::cmd_run(Preset::Script, Some(args.path), &args.launch, &config)
        }
        Command::Test(args) => run::cmd_run(Preset::Test, args.path, &args.launch, &config),
        Command::Docs(args) => run::cmd_run(Preset::Docs, args.path, &args.launch, &config),
        Command::Prepare(args) => {
            prepare::cmd_prepare(Preset::Script, Some(args.path), &args.prepare, &config)
        }
        Command::PrepareTest(args) => {
            prepare::cmd_prepare(Preset::Test, args.path, &args.prepare, &config)
        }
        Command::PrepareDocs(args) => {
            prepare::cmd_prepare(Preset::Docs, args.path, &args.prepare, &config)
        }
    }
}
