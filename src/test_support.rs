use crate::config::RuntimeConfig;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Value recorded for the load-path variable when the child did not get one.
pub(crate) const UNSET: &str = "<unset>";

const FIELD_SEP: char = '\x1e';
const CALL_SEP: char = '\x1d';

/// A shell script standing in for the language runtime.
///
/// Every invocation appends its load-path variable and arguments to a log,
/// then exits with `eval_code` when invoked with `-e` and `run_code` otherwise.
pub(crate) struct FakeRuntime {
    pub(crate) program: PathBuf,
    log: PathBuf,
}

/// One recorded invocation.
#[derive(Debug, Clone)]
pub(crate) struct FakeCall {
    pub(crate) load_path: String,
    pub(crate) args: Vec<String>,
}

impl FakeRuntime {
    pub(crate) fn exiting_with(dir: &TempDir, code: i32) -> Self {
        Self::with_codes(dir, code, code)
    }

    pub(crate) fn with_codes(dir: &TempDir, eval_code: i32, run_code: i32) -> Self {
        let program = dir.path().join("fake-runtime");
        let log = dir.path().join("fake-runtime.log");

        let script = format!(
            r#"#!/bin/sh
log='{log}'
printf '%s\036' "${{JULIA_LOAD_PATH-{unset}}}" >> "$log"
eval_mode=0
for arg in "$@"; do
  printf '%s\036' "$arg" >> "$log"
  if [ "$arg" = "-e" ]; then eval_mode=1; fi
done
printf '\035' >> "$log"
if [ "$eval_mode" = 1 ]; then exit {eval_code}; fi
exit {run_code}
"#,
            log = log.display(),
            unset = UNSET,
        );

        // Written and closed before any test execs it, to avoid ETXTBSY.
        std::fs::write(&program, script).unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { program, log }
    }

    pub(crate) fn calls(&self) -> Vec<FakeCall> {
        let content = match std::fs::read_to_string(&self.log) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        content
            .split(CALL_SEP)
            .filter(|call| !call.is_empty())
            .map(|call| {
                let mut fields: Vec<String> =
                    call.split(FIELD_SEP).map(str::to_string).collect();
                // Trailing separator leaves an empty last field.
                fields.pop();
                let load_path = fields.remove(0);
                FakeCall {
                    load_path,
                    args: fields,
                }
            })
            .collect()
    }
}

/// Runtime config pointing at `fake`.
pub(crate) fn runtime_for(fake: &FakeRuntime) -> RuntimeConfig {
    RuntimeConfig {
        program: fake.program.to_string_lossy().into_owned(),
        ..RuntimeConfig::default()
    }
}
