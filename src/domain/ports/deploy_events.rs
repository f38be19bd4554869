//! Deploy Event Port
//!
//! Provides an observable interface for the deploy sequence.
//! Enables console progress, JSON event streams, and testing.

use std::path::PathBuf;

use crate::domain::value_objects::{StepKind, StepOutcome};

/// Event emitted while the sequence runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Sequence started
    Started {
        workdir: PathBuf,
        step_count: usize,
        dry_run: bool,
    },

    /// A step is about to run
    StepStarted {
        index: usize,
        kind: StepKind,
        /// Rendered command line, for steps that spawn a process
        command: Option<String>,
    },

    /// A step finished (or was skipped)
    StepFinished {
        index: usize,
        kind: StepKind,
        outcome: StepOutcome,
    },

    /// Sequence finished; always emitted
    Completed {
        completed: usize,
        skipped: usize,
        failed: usize,
        suppressed: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
