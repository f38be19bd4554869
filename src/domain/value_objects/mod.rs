//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ignore_file;
mod invocation;
mod step;
mod venv;

pub use ignore_file::{default_gitignore_entries, render_ignore_file, DEFAULT_GITIGNORE_ENTRIES};
pub use invocation::{EnvChange, Invocation};
pub use step::{FailurePolicy, Step, StepKind, StepOutcome};
pub use venv::VenvActivation;
