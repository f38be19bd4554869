//! Step value objects - the units of the deploy sequence
//!
//! A `Step` carries everything needed to execute it. `StepKind` is the
//! stable discriminant used in events, reports and JSON output.

use std::path::PathBuf;

use serde::Serialize;

/// One step of the deploy sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Activate the virtual environment for all later invocations
    ActivateVenv { path: PathBuf },
    /// `pip install -r <manifest>` when the manifest exists
    InstallRequirements { manifest: PathBuf },
    /// Create the ignore file with fixed entries when it is missing
    EnsureGitignore { path: PathBuf, entries: Vec<String> },
    /// `git rm --cached <path>` when the secrets file exists
    UntrackSecrets { path: PathBuf },
    /// `git add <paths...>`
    Stage { paths: Vec<PathBuf> },
    /// `git commit -m <message>`
    Commit { message: String },
    /// `git push <remote> <branch>`
    Push { remote: String, branch: String },
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::ActivateVenv { .. } => StepKind::ActivateVenv,
            Step::InstallRequirements { .. } => StepKind::InstallRequirements,
            Step::EnsureGitignore { .. } => StepKind::EnsureGitignore,
            Step::UntrackSecrets { .. } => StepKind::UntrackSecrets,
            Step::Stage { .. } => StepKind::Stage,
            Step::Commit { .. } => StepKind::Commit,
            Step::Push { .. } => StepKind::Push,
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.kind().failure_policy()
    }
}

/// Discriminant of a [`Step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    ActivateVenv,
    InstallRequirements,
    EnsureGitignore,
    UntrackSecrets,
    Stage,
    Commit,
    Push,
}

impl StepKind {
    /// Stable kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::ActivateVenv => "activate-venv",
            StepKind::InstallRequirements => "install-requirements",
            StepKind::EnsureGitignore => "ensure-gitignore",
            StepKind::UntrackSecrets => "untrack-secrets",
            StepKind::Stage => "stage",
            StepKind::Commit => "commit",
            StepKind::Push => "push",
        }
    }

    /// Human-readable label for console output
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::ActivateVenv => "Activate virtual environment",
            StepKind::InstallRequirements => "Install requirements",
            StepKind::EnsureGitignore => "Ensure .gitignore",
            StepKind::UntrackSecrets => "Untrack secrets file",
            StepKind::Stage => "Stage files",
            StepKind::Commit => "Commit",
            StepKind::Push => "Push",
        }
    }

    /// Untracking and committing discard their exit codes; nothing else does.
    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            StepKind::UntrackSecrets | StepKind::Commit => FailurePolicy::Suppressed,
            _ => FailurePolicy::Unchecked,
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a step's failure is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure is recorded; the sequence continues
    Unchecked,
    /// Failure is discarded and reported as success
    Suppressed,
}

/// What happened to a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Ran and succeeded
    Completed,
    /// Guard was false; nothing ran
    Skipped { reason: String },
    /// Ran and failed (unchecked)
    Failed { code: Option<i32>, message: Option<String> },
    /// Ran and failed, but the failure is discarded
    Suppressed { code: Option<i32> },
    /// The program could not be spawned
    Unavailable { error: String },
    /// Dry run: would have run
    Planned,
}

impl StepOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        StepOutcome::Skipped {
            reason: reason.into(),
        }
    }

    /// True for outcomes a caller should treat as a real failure
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. } | StepOutcome::Unavailable { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StepOutcome::Skipped { .. })
    }
}
