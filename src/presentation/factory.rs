//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::{CheckUseCase, DeployUseCase};
use crate::infrastructure::{KeypressAcknowledger, LocalFs, OutputMode, ProcessRunner};

/// Deploy use case backed by real processes, disk and keyboard
pub type ConcreteDeployUseCase = DeployUseCase<ProcessRunner, LocalFs, KeypressAcknowledger>;

/// Check use case backed by real processes and disk
pub type ConcreteCheckUseCase = CheckUseCase<ProcessRunner, LocalFs>;

/// Create a deploy use case
///
/// `Inherit` lets tool output reach the terminal; JSON mode captures it so
/// stdout stays machine-readable.
pub fn create_deploy_use_case(mode: OutputMode) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        ProcessRunner::new(mode),
        LocalFs::new(),
        KeypressAcknowledger::new(),
    )
}

/// Create a check use case; probe output is always captured
pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(ProcessRunner::captured(), LocalFs::new())
}
