//! Command Runner Port
//!
//! Every external tool (pip, git) is reached through this trait so the
//! sequencer can be exercised without spawning processes.

use thiserror::Error;

use crate::domain::value_objects::Invocation;

/// Exit information of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandStatus {
    /// Exit code (`None` if killed by a signal)
    pub code: Option<i32>,
    /// Captured stderr, when the runner captures output
    pub stderr: Option<String>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: None,
        }
    }

    pub fn exit(code: i32) -> Self {
        Self {
            code: Some(code),
            stderr: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// The process could not be started at all
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("program not found: {program}")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run the invocation and wait for it to exit
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunnerError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunnerError> {
        (**self).run(invocation)
    }
}
