use std::path::Path;
use std::process::Command;

use crate::error::Result;

/// Captured result of running one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ScriptOutcome {
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Trait for running a script through an interpreter (for testability).
pub trait ScriptRunner {
    /// Run `interpreter` with `script` as its sole argument.
    ///
    /// # Errors
    /// Returns an error if the process cannot be started.
    fn run(&self, interpreter: &Path, script: &Path) -> Result<ScriptOutcome>;
}

/// Runs scripts as child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ScriptRunner for ProcessRunner {
    fn run(&self, interpreter: &Path, script: &Path) -> Result<ScriptOutcome> {
        let output = Command::new(interpreter).arg(script).output()?;
        Ok(ScriptOutcome {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
