//! gitship - deploy a Python project by committing and pushing it
//!
//! Runs a fixed sequence against a working directory: activate the virtual
//! environment, install requirements, make sure an ignore file exists,
//! untrack the secrets file, then stage, commit and push.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckResult, CheckUseCase, DeployOptions, DeployReport, DeployUseCase, COMPLETION_MESSAGE,
};
pub use config::{Config, ConfigWarning};
pub use domain::services::DeployPlan;
pub use domain::value_objects::{Step, StepKind, StepOutcome};
pub use error::{GitshipError, GitshipResult};
