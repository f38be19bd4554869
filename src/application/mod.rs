//! Application Layer
//!
//! Use cases that orchestrate the flow. This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT spawn processes or touch disk itself (ports do)
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - The deployment sequencer
//! - `CheckUseCase` - Read-only inspection of what the sequence depends on
//! - `init` - Writes a default `gitship.toml`

pub mod check;
pub mod deploy;
pub mod init;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use deploy::{DeployOptions, DeployReport, DeployUseCase, StepRecord, COMPLETION_MESSAGE};
pub use init::init_config;
