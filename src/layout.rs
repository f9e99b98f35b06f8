//! Destination layout tables for generated packages.
//!
//! The tables are explicit immutable configuration rather than ambient
//! state: the defaults below describe the standard package tree, and tests
//! or a host application can substitute alternate layouts through the
//! configuration file.

use crate::error::{Error, Result};
use crate::kind::ArtifactKind;
use indexmap::IndexMap;
use serde::Deserialize;

/// The full package type; restricted sub-types only scaffold folders and
/// files, this one also gets its structural classes.
pub const PACKAGE_TYPE: &str = "package";

/// Folder and file tables for one package type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeLayout {
    /// Scaffold folders, keyed by role, relative to `<package>/src`
    pub folders: IndexMap<String, String>,
    /// Package-level stub manifest: stub key -> destination relative to
    /// `<package>/src` (entries may climb out of `src` with `..`)
    pub files: IndexMap<String, String>,
}

/// All destination tables, per package type plus the kind-keyed artifact
/// table shared by the single-artifact generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Artifact kind key -> sub-directory relative to `<package>/src`
    pub artifacts: IndexMap<String, String>,
    /// Per-type folder and file tables
    pub types: IndexMap<String, TypeLayout>,
}

impl Layout {
    /// Looks up the destination sub-directory for an artifact kind.
    ///
    /// A kind absent from the table is a configuration defect, reported as
    /// [`Error::Config`] rather than treated as a runtime condition.
    pub fn artifact_dir(&self, kind: ArtifactKind) -> Result<&str> {
        self.artifacts.get(kind.key()).map(String::as_str).ok_or_else(|| {
            Error::Config(format!(
                "no destination path configured for artifact kind '{kind}'"
            ))
        })
    }

    /// Returns the folder/file tables for a package type.
    pub fn type_layout(&self, package_type: &str) -> Result<&TypeLayout> {
        self.types.get(package_type).ok_or_else(|| {
            Error::Config(format!("unknown package type '{package_type}'"))
        })
    }
}

impl Default for Layout {
    fn default() -> Self {
        let artifacts = [
            ("controller", "Http/Controllers"),
            ("resource", "Http/Resources"),
            ("provider", "Providers"),
            ("module-provider", "Providers"),
            ("admin-controller", "Http/Controllers/Admin"),
            ("admin-route", "Http"),
            ("model", "Models"),
            ("model-proxy", "Models"),
            ("migration", "Database/Migrations"),
            ("seeder", "Database/Seeders"),
            ("middleware", "Http/Middleware"),
            ("request", "Http/Requests"),
            ("event", "Events"),
            ("listener", "Listeners"),
            ("mail", "Mail"),
            ("command", "Console/Commands"),
            ("repository", "Repositories"),
            ("contract", "Contracts"),
            ("notification", "Notifications"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let folders = [
            ("config", "Config"),
            ("command", "Console/Commands"),
            ("migration", "Database/Migrations"),
            ("seeder", "Database/Seeders"),
            ("contracts", "Contracts"),
            ("model", "Models"),
            ("routes", "Http"),
            ("controller", "Http/Controllers"),
            ("filter", "Http/Middleware"),
            ("request", "Http/Requests"),
            ("provider", "Providers"),
            ("repository", "Repositories"),
            ("event", "Events"),
            ("listener", "Listeners"),
            ("emails", "Mail"),
            ("assets", "Resources/assets"),
            ("lang", "Resources/lang"),
            ("views", "Resources/views"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let files = [
            ("scaffold/admin-menu", "Config/admin-menu.php"),
            ("scaffold/acl", "Config/acl.php"),
            ("assets/js/app", "Resources/assets/js/app.js"),
            ("assets/sass/admin", "Resources/assets/sass/admin.scss"),
            ("assets/sass/default", "Resources/assets/sass/default.scss"),
            ("assets/publishable/css/admin", "../publishable/assets/css/admin.css"),
            ("assets/publishable/css/default", "../publishable/assets/css/default.css"),
            ("assets/publishable/js/app", "../publishable/assets/js/app.js"),
            ("package", "../package.json"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut types = IndexMap::new();
        types.insert(PACKAGE_TYPE.to_string(), TypeLayout { folders, files });

        Self { artifacts, types }
    }
}
