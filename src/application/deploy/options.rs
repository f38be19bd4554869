//! Deploy Options
//!
//! Configuration types for the deploy sequence.

use std::ffi::OsString;
use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory the sequence runs in (guards and relative paths resolve here)
    pub workdir: PathBuf,
    /// Dry run (evaluate guards, spawn nothing, write nothing)
    pub dry_run: bool,
    /// Wait for operator acknowledgment after completion
    pub pause: bool,
    /// `PATH` the venv script directory is prepended to
    pub base_path: Option<OsString>,
}

impl DeployOptions {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            dry_run: false,
            pause: false,
            base_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_base_path(mut self, path: Option<OsString>) -> Self {
        self.base_path = path;
        self
    }
}
