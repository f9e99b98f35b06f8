//! Path planning for generated packages.
//! Pure composition of destination paths from the packages root, the layout
//! tables and derived names.

use crate::config::Config;
use crate::error::Result;
use crate::kind::ArtifactKind;
use std::path::PathBuf;

/// Resolves destination paths under the package root convention
/// `<packages_root>/<package>/src/...`.
///
/// The planner is a pure function of its inputs plus the layout tables; it
/// touches the filesystem nowhere.
#[derive(Debug, Clone, Copy)]
pub struct PathPlanner<'a> {
    config: &'a Config,
}

impl<'a> PathPlanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Source root of a package: `<packages_root>/<package>/src`.
    pub fn package_src_root(&self, package: &str) -> PathBuf {
        self.config.packages_root.join(package).join("src")
    }

    /// Destination of a single artifact source file.
    pub fn source_file(
        &self,
        package: &str,
        kind: ArtifactKind,
        file_stem: &str,
    ) -> Result<PathBuf> {
        let sub_path = self.config.layout.artifact_dir(kind)?;
        Ok(self
            .package_src_root(package)
            .join(sub_path)
            .join(format!("{file_stem}.{}", self.config.source_extension)))
    }

    /// Scaffold folders for a package type, in table order.
    pub fn scaffold_folders(&self, package: &str, package_type: &str) -> Result<Vec<PathBuf>> {
        let src_root = self.package_src_root(package);
        let type_layout = self.config.layout.type_layout(package_type)?;
        Ok(type_layout.folders.values().map(|folder| src_root.join(folder)).collect())
    }

    /// Destination of a package-level file.
    ///
    /// `relative_dest` comes from the stub manifest and may climb out of
    /// `src` with `..` (publishable assets, the package manifest).
    pub fn package_file(&self, package: &str, relative_dest: &str) -> PathBuf {
        self.package_src_root(package).join(relative_dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_composition() {
        let config = Config::default();
        let planner = PathPlanner::new(&config);
        let path = planner.source_file("blog", ArtifactKind::Controller, "PostController").unwrap();
        assert_eq!(path, PathBuf::from("packages/blog/src/Http/Controllers/PostController.php"));
    }

    #[test]
    fn test_package_file_may_climb() {
        let config = Config::default();
        let planner = PathPlanner::new(&config);
        let path = planner.package_file("blog", "../package.json");
        assert_eq!(path, PathBuf::from("packages/blog/src/../package.json"));
    }
}
