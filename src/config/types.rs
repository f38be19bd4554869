//! Configuration type definitions
//!
//! Every default equals the value the deploy sequence hard-codes, so an
//! absent config file reproduces the stock behavior exactly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::default_gitignore_entries;
use crate::error::GitshipResult;

use super::loader::{self, ConfigWarning};

/// Virtual environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenvConfig {
    /// Venv directory, relative to the working directory
    #[serde(default = "default_venv_path")]
    pub path: PathBuf,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            path: default_venv_path(),
        }
    }
}

fn default_venv_path() -> PathBuf {
    PathBuf::from("venv")
}

/// Package installer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default = "default_installer")]
    pub program: String,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: default_installer(),
            manifest: default_manifest(),
        }
    }
}

fn default_installer() -> String {
    "pip".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("requirements.txt")
}

/// Ignore file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitignoreConfig {
    #[serde(default = "default_gitignore_path")]
    pub path: PathBuf,

    /// Lines written when the file is missing
    #[serde(default = "default_gitignore_entries")]
    pub entries: Vec<String>,
}

impl Default for GitignoreConfig {
    fn default() -> Self {
        Self {
            path: default_gitignore_path(),
            entries: default_gitignore_entries(),
        }
    }
}

fn default_gitignore_path() -> PathBuf {
    PathBuf::from(".gitignore")
}

/// Secrets file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsConfig {
    #[serde(default = "default_secrets_path")]
    pub path: PathBuf,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            path: default_secrets_path(),
        }
    }
}

fn default_secrets_path() -> PathBuf {
    PathBuf::from(".env")
}

/// Version-control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_git")]
    pub program: String,

    /// Paths passed to `git add`
    #[serde(default = "default_stage")]
    pub stage: Vec<PathBuf>,

    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_git(),
            stage: default_stage(),
            message: default_message(),
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

fn default_git() -> String {
    "git".to_string()
}

fn default_stage() -> Vec<PathBuf> {
    vec![
        PathBuf::from("server.py"),
        PathBuf::from("requirements.txt"),
        PathBuf::from(".gitignore"),
    ]
}

fn default_message() -> String {
    "Deploy update".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Run behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Wait for a key press after the completion message
    #[serde(default = "default_true")]
    pub pause: bool,

    /// Exit non-zero when an unchecked step failed
    #[serde(default)]
    pub strict: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pause: true,
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub venv: VenvConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub gitignore: GitignoreConfig,

    #[serde(default)]
    pub secrets: SecretsConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GitshipResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GitshipResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(workdir: &Path) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(workdir)
    }

    /// Render as TOML (used by `init`)
    pub fn to_toml(&self) -> GitshipResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
