//! Stub template store.
//! Resolves artifact-kind keys to `.stub` assets and loads their raw text.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Read-only store of stub templates, one file per key.
///
/// Keys map to `<root>/<key>.stub`; package-level manifest keys may contain
/// slashes (`assets/js/app`). The store is a build-time asset directory and
/// is never written at runtime.
#[derive(Debug, Clone)]
pub struct StubStore {
    root: PathBuf,
}

impl StubStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Path of the stub asset for a key.
    pub fn stub_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.stub"))
    }

    /// Loads the raw template text for a key.
    ///
    /// # Errors
    /// * [`Error::TemplateNotFound`] if the asset is absent or unreadable.
    ///   This is a misconfiguration of the template store, fatal for the
    ///   current generation call.
    pub fn load(&self, key: &str) -> Result<String> {
        let path = self.stub_path(key);
        debug!("loading stub '{}' from {}", key, path.display());
        std::fs::read_to_string(&path).map_err(|_| Error::TemplateNotFound {
            key: key.to_string(),
            path: path.display().to_string(),
        })
    }
}
