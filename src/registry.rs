//! Package registry collaborator.
//! Answers whether a package exists and removes one wholesale; the
//! directory-backed implementation treats presence on disk as authoritative.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Authoritative record of which packages exist.
pub trait PackageRegistry {
    /// Whether a package with this name is already registered.
    fn exists(&self, name: &str) -> Result<bool>;

    /// Removes the package and everything it owns.
    fn delete(&self, name: &str) -> Result<()>;
}

/// Registry backed by the packages root directory: a package exists iff
/// its directory does.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    root: PathBuf,
}

impl DirectoryRegistry {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    fn package_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl PackageRegistry for DirectoryRegistry {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.package_dir(name).is_dir())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let dir = self.package_dir(name);
        debug!("deleting package directory {}", dir.display());
        std::fs::remove_dir_all(&dir).map_err(|e| {
            Error::Registry(format!("cannot delete package '{name}': {e}"))
        })
    }
}
