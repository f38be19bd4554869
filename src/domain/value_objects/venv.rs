//! Virtual environment activation
//!
//! Activation cannot change the parent shell, so it is expressed as the set
//! of environment changes every later invocation runs with: `VIRTUAL_ENV`,
//! the script directory prepended to `PATH`, and `PYTHONHOME` unset.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use super::invocation::EnvChange;

#[cfg(windows)]
const SCRIPT_DIR: &str = "Scripts";
#[cfg(not(windows))]
const SCRIPT_DIR: &str = "bin";

#[cfg(windows)]
const ACTIVATE_SCRIPT: &str = "activate.bat";
#[cfg(not(windows))]
const ACTIVATE_SCRIPT: &str = "activate";

/// A virtual environment rooted at `root`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvActivation {
    root: PathBuf,
}

impl VenvActivation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<venv>/bin` (or `<venv>\Scripts` on Windows)
    pub fn script_dir(&self) -> PathBuf {
        self.root.join(SCRIPT_DIR)
    }

    /// The activation script whose presence marks a usable venv
    pub fn activation_script(&self) -> PathBuf {
        self.script_dir().join(ACTIVATE_SCRIPT)
    }

    /// Environment changes equivalent to sourcing the activation script.
    pub fn env_changes(
        &self,
        current_path: Option<&OsStr>,
    ) -> Result<Vec<EnvChange>, std::env::JoinPathsError> {
        let mut entries = vec![self.script_dir()];
        if let Some(path) = current_path {
            entries.extend(std::env::split_paths(path));
        }
        let joined = std::env::join_paths(entries)?;

        Ok(vec![
            EnvChange::Set("VIRTUAL_ENV".into(), OsString::from(self.root.as_os_str())),
            EnvChange::Set("PATH".into(), joined),
            EnvChange::Remove("PYTHONHOME".into()),
        ])
    }
}
