//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `factory` - creates use cases with infrastructure dependencies
//! - `output` - console rendering of deploy progress and check results

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_check_use_case, create_deploy_use_case};
pub use output::{render_check, render_config_warnings, ConsoleEventSink, TextStyle};
