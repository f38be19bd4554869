//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and are renamed
/// into place, so a reader never sees a half-written `.gitignore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Temp file in `parent` that persists with the mode a plain create would give:
/// the existing target's mode, else 0o666 under the umask (tempfile defaults to 0o600).
fn temp_file_for(target: &Path, parent: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::Builder::new()
            .permissions(std::fs::Permissions::from_mode(0o666))
            .tempfile_in(parent)?;
        if let Ok(meta) = std::fs::metadata(target) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        Ok(tmp)
    }

    #[cfg(not(unix))]
    {
        let _ = target;
        tempfile::NamedTempFile::new_in(parent)
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        let mut tmp = temp_file_for(path, parent).map_err(|e| FsError::from_io(e, parent))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(e, path))?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
