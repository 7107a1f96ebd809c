//! CLI argument parsing for runproj.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{Depwarn, Toggle};
use crate::launch::LaunchOptions;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Runproj: run tests, docs builds, or scripts in an isolated project environment.
///
/// Each run activates the project next to the script, optionally instantiates
/// and precompiles its dependencies, launches the runtime with the requested
/// flags, and exits non-zero only when the child's exit code is not accepted.
#[derive(Parser, Debug)]
#[command(name = "runproj")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $RUNPROJ_CONFIG, then ./runproj.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). Overridden by $RUNPROJ_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for runproj.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a script after activating the project it lives in.
    Script(ScriptArgs),

    /// Run the test suite (`<path>/runtests.jl`, default path `test`).
    ///
    /// Enables code coverage, bounds checking and deprecation warnings
    /// unless overridden.
    Test(PresetArgs),

    /// Build the documentation (`<path>/make.jl`, default path `docs`).
    Docs(PresetArgs),

    /// Instantiate a project, developing its parent project when it has no
    /// manifest yet.
    Prepare(PrepareArgs),

    /// Alias of `prepare test`.
    PrepareTest(PreparePresetArgs),

    /// Alias of `prepare docs`.
    PrepareDocs(PreparePresetArgs),
}

/// Arguments for the `script` command.
#[derive(Parser, Debug)]
pub struct ScriptArgs {
    /// Script to run.
    pub path: PathBuf,

    #[command(flatten)]
    pub launch: LaunchArgs,
}

/// Arguments for the `test` and `docs` commands.
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Project directory or script (default from config).
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub launch: LaunchArgs,
}

/// Options shared by every launching command.
#[derive(Args, Debug, Default)]
pub struct LaunchArgs {
    /// Project to activate instead of the script's directory.
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Project developed into the target when it has no manifest.
    #[arg(long)]
    pub parent_project: Option<PathBuf>,

    /// Skip preparation and minimize JIT compilation (--compile=min).
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub fast: Option<bool>,

    /// Prepare the project first (default: not --fast).
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub prepare: Option<bool>,

    /// Precompile during preparation (default: compiled modules not disabled).
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub precompile: Option<bool>,

    /// --compiled-modules mode; `no` also disables precompilation.
    #[arg(long, value_enum)]
    pub compiled_modules: Option<Toggle>,

    /// Restrict the load path to the activated project (default: true).
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub strict: Option<bool>,

    /// --code-coverage mode.
    #[arg(long, value_enum)]
    pub code_coverage: Option<Toggle>,

    /// --check-bounds mode.
    #[arg(long, value_enum)]
    pub check_bounds: Option<Toggle>,

    /// --depwarn mode.
    #[arg(long, value_enum)]
    pub depwarn: Option<Depwarn>,

    /// Expect the child to fail; any non-zero exit counts as success.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub xfail: Option<bool>,

    /// Accepted exit codes; takes precedence over --xfail.
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    pub exitcodes: Vec<i32>,

    /// Clear accepted exit codes set by the config file.
    #[arg(long, conflicts_with = "exitcodes")]
    pub no_exitcodes: bool,

    /// Print the resolved command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the resolved launch as JSON.
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

impl LaunchArgs {
    /// Options explicitly given on the command line.
    pub fn to_options(&self) -> LaunchOptions {
        LaunchOptions {
            project: self.project.clone(),
            parent_project: self.parent_project.clone(),
            fast: self.fast,
            prepare: self.prepare,
            compiled_modules: self.compiled_modules,
            precompile: self.precompile,
            strict: self.strict,
            code_coverage: self.code_coverage,
            check_bounds: self.check_bounds,
            depwarn: self.depwarn,
            xfail: self.xfail,
            exitcodes: if self.no_exitcodes {
                Some(Vec::new())
            } else {
                (!self.exitcodes.is_empty()).then(|| self.exitcodes.clone())
            },
        }
    }
}

/// Arguments for the `prepare` command.
#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Project directory to prepare.
    pub path: PathBuf,

    #[command(flatten)]
    pub prepare: PrepareFlags,
}

/// Arguments for the `prepare-test` and `prepare-docs` commands.
#[derive(Parser, Debug)]
pub struct PreparePresetArgs {
    /// Project directory to prepare (default from config).
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub prepare: PrepareFlags,
}

/// Options shared by the preparation commands.
#[derive(Args, Debug, Default)]
pub struct PrepareFlags {
    /// Skip precompilation.
    #[arg(long)]
    pub no_precompile: bool,

    /// Project developed into the target when it has no manifest
    /// (default: parent directory).
    #[arg(long)]
    pub parent_project: Option<PathBuf>,

    /// Restrict the load path to the prepared project (default: true).
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub strict: Option<bool>,

    /// Print the resolved command instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
