//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process/` - External process runner
//! - `events/` - Machine-readable event sinks
//! - `prompt/` - Operator acknowledgment

pub mod events;
pub mod fs;
pub mod process;
pub mod prompt;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::{OutputMode, ProcessRunner};
pub use prompt::KeypressAcknowledger;
