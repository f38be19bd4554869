//! Deploy Module
//!
//! The deployment sequencer.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `result` - Per-step records (`DeployReport`)
//! - `use_case` - The sequencer itself (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use gitship::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(ProcessRunner::new(OutputMode::Inherit), LocalFs::new(), NoPause);
//! let report = use_case.execute(&plan, &DeployOptions::new(workdir));
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, StepRecord};
pub use use_case::{DeployUseCase, COMPLETION_MESSAGE};
