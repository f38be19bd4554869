//! Deploy planning service
//!
//! Turns configuration into the fixed, ordered step list and renders the
//! external command each step runs. No I/O happens here; guards are
//! evaluated by the sequencer when each step is reached.

use std::path::Path;

use crate::config::Config;
use crate::domain::value_objects::{Invocation, Step};

/// The ordered deploy sequence plus the programs it invokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    steps: Vec<Step>,
    git: String,
    installer: String,
}

impl DeployPlan {
    /// Build the sequence: activate, install, ignore file, untrack, stage, commit, push.
    pub fn from_config(config: &Config) -> Self {
        let steps = vec![
            Step::ActivateVenv {
                path: config.venv.path.clone(),
            },
            Step::InstallRequirements {
                manifest: config.install.manifest.clone(),
            },
            Step::EnsureGitignore {
                path: config.gitignore.path.clone(),
                entries: config.gitignore.entries.clone(),
            },
            Step::UntrackSecrets {
                path: config.secrets.path.clone(),
            },
            Step::Stage {
                paths: config.git.stage.clone(),
            },
            Step::Commit {
                message: config.git.message.clone(),
            },
            Step::Push {
                remote: config.git.remote.clone(),
                branch: config.git.branch.clone(),
            },
        ];

        Self {
            steps,
            git: config.git.program.clone(),
            installer: config.install.program.clone(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The external command a step runs, or `None` for in-process steps.
    pub fn invocation(&self, step: &Step, workdir: &Path) -> Option<Invocation> {
        match step {
            Step::ActivateVenv { .. } | Step::EnsureGitignore { .. } => None,
            Step::InstallRequirements { manifest } => Some(
                Invocation::new(&self.installer, workdir)
                    .args(["install", "-r"])
                    .arg(manifest.as_os_str()),
            ),
            Step::UntrackSecrets { path } => Some(
                Invocation::new(&self.git, workdir)
                    .args(["rm", "--cached"])
                    .arg(path.as_os_str()),
            ),
            Step::Stage { paths } => Some(
                Invocation::new(&self.git, workdir)
                    .arg("add")
                    .args(paths.iter().map(|p| p.as_os_str())),
            ),
            Step::Commit { message } => Some(
                Invocation::new(&self.git, workdir)
                    .args(["commit", "-m"])
                    .arg(message),
            ),
            Step::Push { remote, branch } => Some(
                Invocation::new(&self.git, workdir)
                    .arg("push")
                    .arg(remote)
                    .arg(branch),
            ),
        }
    }
}
