//! Process Runner
//!
//! Spawns external programs with `std::process::Command` and waits for them.
//! In `Inherit` mode the tool's own output goes straight to the console, as
//! it would from a shell script. `Capture` keeps stdout/stderr off the
//! terminal (JSON mode, `check`).

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::domain::ports::{CommandRunner, CommandStatus, RunnerError};
use crate::domain::value_objects::{EnvChange, Invocation};

/// Where a child's output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares our stdout/stderr
    Inherit,
    /// Output is captured; stderr is kept in the status
    Capture,
}

/// CommandRunner that spawns real processes
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    mode: OutputMode,
}

impl ProcessRunner {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn captured() -> Self {
        Self::new(OutputMode::Capture)
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);
        for change in &invocation.env {
            match change {
                EnvChange::Set(key, value) => {
                    cmd.env(key, value);
                }
                EnvChange::Remove(key) => {
                    cmd.env_remove(key);
                }
            }
        }
        cmd
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunnerError> {
        let program = invocation.program_lossy();
        let mut cmd = Self::command(invocation);

        let spawn_error = |e: std::io::Error| {
            if e.kind() == ErrorKind::NotFound {
                RunnerError::NotFound {
                    program: program.clone(),
                }
            } else {
                RunnerError::Spawn {
                    program: program.clone(),
                    source: e,
                }
            }
        };

        match self.mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                Ok(CommandStatus {
                    code: status.code(),
                    stderr: None,
                })
            }
            OutputMode::Capture => {
                let output = cmd.stdin(Stdio::null()).output().map_err(spawn_error)?;
                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.trim().is_empty() {
                    trace!(program = %program, "stdout: {}", stdout.trim());
                }
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                Ok(CommandStatus {
                    code: output.status.code(),
                    stderr: if stderr.trim().is_empty() {
                        None
                    } else {
                        Some(stderr)
                    },
                })
            }
        }
    }
}
