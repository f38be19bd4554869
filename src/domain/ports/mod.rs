//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod acknowledger;
pub mod command_runner;
pub mod deploy_events;
pub mod file_system;

pub use acknowledger::{Acknowledger, NoPause};
pub use command_runner::{CommandRunner, CommandStatus, RunnerError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
