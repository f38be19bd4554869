//! FileSystem port - abstraction over the few file operations the sequence needs
//!
//! Lets the sequencer check guards and write the ignore file without
//! depending on a concrete implementation (local disk, in-memory mock).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors, always carrying the path involved
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FsError {
    /// Attach the path to an I/O error
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            _ => FsError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

/// The file operations the deploy sequence performs
///
/// `LocalFs` writes atomically; tests use in-memory maps.
pub trait FileSystem {
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace `path` with `content`; readers never see a partial file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// True for files and directories alike
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_path() {
        let err = FsError::NotFound(PathBuf::from("requirements.txt"));
        assert_eq!(err.to_string(), "not found: requirements.txt");
    }

    #[test]
    fn other_io_errors_keep_source_and_path() {
        let io_err = std::io::Error::other("disk full");
        let fs_err = FsError::from_io(io_err, Path::new(".gitignore"));
        assert_eq!(fs_err.path(), Path::new(".gitignore"));
        assert_eq!(fs_err.to_string(), ".gitignore: disk full");
    }

    #[test]
    fn fs_error_from_io_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fs_err = FsError::from_io(io_err, Path::new(".gitignore"));
        assert!(matches!(fs_err, FsError::PermissionDenied(p) if p == Path::new(".gitignore")));
    }
}
