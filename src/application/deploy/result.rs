//! Deploy Report
//!
//! Result types for the deploy sequence.

use serde::Serialize;

use crate::domain::value_objects::{StepKind, StepOutcome};

/// Outcome of one step, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub kind: StepKind,
    pub outcome: StepOutcome,
}

/// Result of a deploy run
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeployReport {
    pub steps: Vec<StepRecord>,
    pub dry_run: bool,
}

impl DeployReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            steps: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, index: usize, kind: StepKind, outcome: StepOutcome) {
        self.steps.push(StepRecord {
            index,
            kind,
            outcome,
        });
    }

    /// Outcome of the first step of `kind`
    pub fn outcome(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| &r.outcome)
    }

    /// True if an unchecked step failed or a program was unavailable
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|r| r.outcome.is_failure())
    }

    pub fn completed_count(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Completed | StepOutcome::Planned))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(StepOutcome::is_skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(StepOutcome::is_failure)
    }

    pub fn suppressed_count(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Suppressed { .. }))
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.steps.iter().filter(|r| pred(&r.outcome)).count()
    }
}
