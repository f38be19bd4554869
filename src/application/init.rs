//! Init: write the default configuration

use std::path::{Path, PathBuf};

use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::domain::ports::FileSystem;
use crate::error::{GitshipError, GitshipResult};

const HEADER: &str = "# gitship configuration\n\
# Every value below is the built-in default; delete what you don't change.\n\n";

/// Write `gitship.toml` with default settings into `dir`.
///
/// Refuses to overwrite unless `force` is set. Returns the written path.
pub fn init_config<FS: FileSystem>(fs: &FS, dir: &Path, force: bool) -> GitshipResult<PathBuf> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if fs.exists(&path) && !force {
        return Err(GitshipError::ConfigExists { path });
    }

    let content = format!("{}{}", HEADER, Config::default().to_toml()?);
    fs.write(&path, &content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::LocalFs;
    use tempfile::tempdir;

    #[test]
    fn writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config(&LocalFs::new(), dir.path(), false).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[git]\nbranch = \"dev\"\n").unwrap();

        let err = init_config(&LocalFs::new(), dir.path(), false).unwrap_err();
        assert!(matches!(err, GitshipError::ConfigExists { .. }));
        assert!(std::fs::read_to_string(&path).unwrap().contains("dev"));
    }

    #[test]
    fn force_overwrites() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "garbage").unwrap();

        let path = init_config(&LocalFs::new(), dir.path(), true).unwrap();
        assert!(Config::load(&path).is_ok());
    }
}
