//! Project preparation.
//!
//! Instantiates a project's dependencies through the runtime's own package
//! manager before a launch. When the project has no manifest yet, the parent
//! project is developed into it first so the package under test resolves to
//! the working copy.

use crate::config::RuntimeConfig;
use crate::error::{Result, RunError};
use crate::launch::{CommandLine, run_to_exit};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project file marking a directory as a project.
pub const PROJECT_FILE: &str = "Project.toml";

/// Lock file whose absence triggers developing the parent project.
pub const MANIFEST_FILE: &str = "Manifest.toml";

/// What to prepare and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareRequest {
    pub project: PathBuf,
    pub precompile: bool,
    /// Defaults to the parent directory of `project`.
    pub parent_project: Option<PathBuf>,
    pub strict_load_path: bool,
}

/// Instantiate (and optionally precompile) `request.project`.
pub fn prepare_project(request: &PrepareRequest, runtime: &RuntimeConfig) -> Result<()> {
    if !request.project.is_dir() {
        return Err(RunError::UserError(format!(
            "project directory '{}' not found",
            request.project.display()
        )));
    }

    let command = prepare_command(request, runtime)?;

    info!(
        project = %request.project.display(),
        precompile = request.precompile,
        "preparing project"
    );

    let code = run_to_exit(&command)?;
    if code != 0 {
        return Err(RunError::PrepareFailed {
            project: request.project.display().to_string(),
            code,
        });
    }

    Ok(())
}

/// Command line that prepares `request.project`.
pub fn prepare_command(request: &PrepareRequest, runtime: &RuntimeConfig) -> Result<CommandLine> {
    let program = prepare_program(request)?;
    CommandLine::for_eval(
        &request.project,
        &program,
        request.strict_load_path,
        runtime,
    )
}

/// Package-manager program evaluated inside the project.
pub fn prepare_program(request: &PrepareRequest) -> Result<String> {
    let mut statements = vec!["using Pkg".to_string()];

    if !request.project.join(MANIFEST_FILE).exists()
        && let Some(parent) = parent_to_develop(request)?
    {
        statements.push(format!(
            "Pkg.develop(PackageSpec(path = \"{}\"))",
            julia_string(&parent.to_string_lossy())
        ));
    }

    statements.push("Pkg.instantiate()".to_string());
    if request.precompile {
        statements.push("Pkg.precompile()".to_string());
    }

    Ok(statements.join("; "))
}

/// Parent project to develop, if there is one.
///
/// An explicit parent without a project file is an error; the implicit
/// parent directory is simply skipped.
fn parent_to_develop(request: &PrepareRequest) -> Result<Option<PathBuf>> {
    if let Some(explicit) = &request.parent_project {
        let parent = absolute(explicit)?;
        if !parent.join(PROJECT_FILE).is_file() {
            return Err(RunError::UserError(format!(
                "parent project '{}' has no {}",
                explicit.display(),
                PROJECT_FILE
            )));
        }
        return Ok(Some(parent));
    }

    let project = absolute(&request.project)?;
    match project.parent() {
        Some(parent) if parent.join(PROJECT_FILE).is_file() => Ok(Some(parent.to_path_buf())),
        _ => {
            debug!(project = %project.display(), "no parent project to develop");
            Ok(None)
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        RunError::UserError(format!(
            "failed to resolve path '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Escape `s` for use inside a double-quoted Julia string literal.
fn julia_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}
