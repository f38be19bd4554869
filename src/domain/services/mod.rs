//! Domain Services
//!
//! Pure logic with no I/O dependencies.

mod planner;

pub use planner::DeployPlan;
