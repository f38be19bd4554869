//! Error types for gitship
//!
//! Uses `thiserror` for library errors. Step failures are not errors:
//! they are recorded as `StepOutcome` values in the deploy report.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for gitship operations
pub type GitshipResult<T> = Result<T, GitshipError>;

/// Main error type for gitship operations
#[derive(Error, Debug)]
pub enum GitshipError {
    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// `init` would overwrite an existing config
    #[error("{path} already exists (use --force to overwrite)")]
    ConfigExists { path: PathBuf },

    /// Working directory does not exist or is not a directory
    #[error("working directory not found: {path}")]
    WorkdirNotFound { path: PathBuf },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Writing through the file system port failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
