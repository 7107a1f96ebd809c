//! Resolution of the project directory and entry script.

use crate::error::{Result, RunError};
use std::path::{Path, PathBuf};

/// Project to activate and script to run inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub project: PathBuf,
    pub script: PathBuf,
}

/// Resolve `path` into a project and script.
///
/// - A directory is the project; `entry` inside it is the script.
/// - A file is the script; its directory is the project.
///
/// `project` replaces the inferred project when given. The script must exist.
pub fn resolve_target(path: &Path, entry: Option<&str>, project: Option<&Path>) -> Result<Target> {
    let (inferred, script) = if path.is_dir() {
        let entry = entry.ok_or_else(|| {
            RunError::UserError(format!(
                "'{}' is a directory\nFix: pass the path of the script to run.",
                path.display()
            ))
        })?;
        (path.to_path_buf(), path.join(entry))
    } else {
        (script_dir(path), path.to_path_buf())
    };

    if !script.is_file() {
        return Err(RunError::UserError(format!(
            "script '{}' not found",
            script.display()
        )));
    }

    let project = project.map(Path::to_path_buf).unwrap_or(inferred);
    if !project.is_dir() {
        return Err(RunError::UserError(format!(
            "project directory '{}' not found",
            project.display()
        )));
    }

    Ok(Target { project, script })
}

/// Directory containing `script`; `.` for a bare file name.
fn script_dir(script: &Path) -> PathBuf {
    match script.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
