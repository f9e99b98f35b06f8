//! Full-package generation.
//! Orchestrates the registry check, folder scaffolding, package-level file
//! rendering and the structural class generations.

use crate::artifact::{self, write_file, MakeArtifact};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::kind::ArtifactKind;
use crate::layout::PACKAGE_TYPE;
use crate::names::DerivedNames;
use crate::paths::PathPlanner;
use crate::registry::PackageRegistry;
use crate::render::{render, Substitutions};
use crate::stubs::StubStore;
use log::debug;
use std::fs;

/// Generates a complete package skeleton.
///
/// A run walks a fixed sequence: existence check against the registry,
/// folder creation, then — unless `plain` — package-level files and the
/// structural classes. Nothing is rolled back on failure; whatever was
/// written before the failing step stays on disk.
pub struct PackageGenerator<'a> {
    config: &'a Config,
    registry: &'a dyn PackageRegistry,
    package_name: String,
    package_type: String,
    plain: bool,
    force: bool,
}

impl<'a> PackageGenerator<'a> {
    pub fn new(
        config: &'a Config,
        registry: &'a dyn PackageRegistry,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            config,
            registry,
            package_name: package_name.into(),
            package_type: PACKAGE_TYPE.to_string(),
            plain: false,
            force: false,
        }
    }

    /// Restrict the run to folder creation only.
    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    /// Permit replacing an already-registered package.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Select the package type whose layout tables apply.
    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = package_type.into();
        self
    }

    /// Runs the generation.
    ///
    /// # Errors
    /// * [`Error::PackageExists`] when the registry already knows the name
    ///   and `force` is not set; nothing has been written at that point.
    pub fn generate(&self) -> Result<()> {
        if self.registry.exists(&self.package_name)? {
            if self.force {
                self.registry.delete(&self.package_name)?;
            } else {
                return Err(Error::PackageExists { name: self.package_name.clone() });
            }
        }

        self.create_folders()?;

        if !self.plain {
            self.create_files()?;
            self.create_classes()?;
        }

        println!("Package '{}' created successfully.", self.package_name);
        Ok(())
    }

    /// Creates the scaffold tree. Existing directories are not an error.
    fn create_folders(&self) -> Result<()> {
        let planner = PathPlanner::new(self.config);
        for folder in planner.scaffold_folders(&self.package_name, &self.package_type)? {
            debug!("creating directory {}", folder.display());
            fs::create_dir_all(&folder)?;
        }
        Ok(())
    }

    /// Renders the package-level stub manifest.
    ///
    /// These files overwrite unconditionally unless the configuration sets
    /// `files_respect_force`, in which case an existing destination without
    /// the force flag aborts the run.
    fn create_files(&self) -> Result<()> {
        let planner = PathPlanner::new(self.config);
        let store = StubStore::new(&self.config.stubs_dir);
        let substitutions = self.stub_variables();
        let type_layout = self.config.layout.type_layout(&self.package_type)?;

        for (stub_key, relative_dest) in &type_layout.files {
            let dest = planner.package_file(&self.package_name, relative_dest);
            if self.config.files_respect_force && !self.force && dest.exists() {
                return Err(Error::ArtifactExists { path: dest.display().to_string() });
            }
            let content = render(&store.load(stub_key)?, &substitutions);
            write_file(&dest, &content)?;
            println!("Created file: {}", dest.display());
        }
        Ok(())
    }

    /// Generates the structural classes of a full package, in fixed order:
    /// service provider, module service provider, admin controller, admin
    /// route. The first failing step aborts the remaining ones.
    fn create_classes(&self) -> Result<()> {
        if self.package_type != PACKAGE_TYPE {
            return Ok(());
        }

        let names = DerivedNames::derive(&self.package_name, &self.config.namespace_separator);

        self.make_class(ArtifactKind::Provider, &format!("{}ServiceProvider", names.class_name))?;
        self.make_class(ArtifactKind::ModuleProvider, "ModuleServiceProvider")?;
        self.make_class(ArtifactKind::AdminController, &format!("{}Controller", names.class_name))?;
        self.make_class(ArtifactKind::AdminRoute, &format!("{}Controller", names.class_name))?;

        Ok(())
    }

    fn make_class(&self, kind: ArtifactKind, name: &str) -> Result<()> {
        artifact::make(
            self.config,
            &MakeArtifact { kind, name, package: &self.package_name, force: false },
        )
        .map(|_| ())
    }

    /// Package-level substitution map.
    fn stub_variables(&self) -> Substitutions {
        let names = DerivedNames::derive(&self.package_name, &self.config.namespace_separator);
        Substitutions::new()
            .with("LOWER_NAME", names.lower_name.as_str())
            .with("CAPITALIZE_NAME", names.capitalized_name.as_str())
            .with("PACKAGE", names.class_namespace.as_str())
            .with("CLASS", names.class_name.as_str())
    }
}
