//! OS-specific directory resolution.

use std::path::{Path, PathBuf};

const APP_NAME: &str = "terramap";

/// Errors that can occur while resolving or creating platform directories.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Directory creation failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where terramap keeps its config and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds `terramap.log` when file logging is on.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve the OS config directory (XDG on Linux, Known Folders on
    /// Windows, Library on macOS) without touching the disk.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&base))
    }

    /// Resolve directories under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Use `config_dir` as given, with logs in a sibling `logs` directory.
    pub fn from_config_dir(config_dir: &Path) -> Self {
        let log_dir = config_dir
            .parent()
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| config_dir.join("logs"));
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir,
        }
    }

    /// Create both directories on disk.
    pub fn create_all(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_root_layout() {
        let dirs = PlatformDirs::resolve_with_root(Path::new("/tmp/base"));
        assert_eq!(dirs.config_dir, PathBuf::from("/tmp/base/terramap/config"));
        assert_eq!(dirs.log_dir, PathBuf::from("/tmp/base/terramap/logs"));
    }

    #[test]
    fn test_from_config_dir_puts_logs_beside() {
        let dirs = PlatformDirs::from_config_dir(Path::new("/srv/maps/conf"));
        assert_eq!(dirs.config_dir, PathBuf::from("/srv/maps/conf"));
        assert_eq!(dirs.log_dir, PathBuf::from("/srv/maps/logs"));
    }

    #[test]
    fn test_create_all() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_with_root(tmp.path());
        dirs.create_all().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }
}
