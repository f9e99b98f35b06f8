//! Single-artifact generation.
//! Produces exactly one source file from one artifact kind, honoring the
//! force/overwrite policy.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::kind::ArtifactKind;
use crate::names::{class_basename, class_namespace, DerivedNames};
use crate::paths::PathPlanner;
use crate::render::{render, Substitutions};
use crate::stubs::StubStore;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// One artifact generation request.
#[derive(Debug, Clone, Copy)]
pub struct MakeArtifact<'a> {
    pub kind: ArtifactKind,
    /// Target artifact name; the class name is its last path segment
    pub name: &'a str,
    /// Owning package name
    pub package: &'a str,
    /// Permit overwriting an existing destination
    pub force: bool,
}

/// Generates one artifact file and returns the written path.
///
/// # Flow
/// 1. Resolve the destination through the path planner.
/// 2. Refuse an existing destination unless `force` is set; nothing is
///    written in that case.
/// 3. Load the kind's stub, build the substitution map and render.
/// 4. Create missing parent directories and write the file.
///
/// Filesystem errors are fatal for this artifact and do not roll back
/// sibling artifacts written earlier in a multi-artifact run.
pub fn make(config: &Config, request: &MakeArtifact) -> Result<PathBuf> {
    let names = DerivedNames::derive(request.name, &config.namespace_separator);
    let planner = PathPlanner::new(config);
    let file_stem = request.kind.file_stem(&names.class_name);
    let dest = planner.source_file(request.package, request.kind, &file_stem)?;

    if dest.exists() && !request.force {
        return Err(Error::ArtifactExists { path: dest.display().to_string() });
    }

    let stub = StubStore::new(&config.stubs_dir).load(request.kind.key())?;
    let content = render(&stub, &substitutions_for(config, request, &names)?);

    debug!("writing {} artifact to {}", request.kind, dest.display());
    write_file(&dest, &content)?;
    println!("Created file: {}", dest.display());
    Ok(dest)
}

/// Substitution map for one artifact: the target namespace (package path
/// plus the kind's sub-path), the class name, and kind-specific extras.
fn substitutions_for(
    config: &Config,
    request: &MakeArtifact,
    names: &DerivedNames,
) -> Result<Substitutions> {
    let sub_path = config.layout.artifact_dir(request.kind)?;
    let namespace = class_namespace(
        &format!("{}/{}", request.package, sub_path),
        &config.namespace_separator,
    );

    let mut substitutions = Substitutions::new()
        .with("NAMESPACE", namespace)
        .with("CLASS", names.class_name.as_str());
    if request.kind.wants_lower_name() {
        substitutions.set("LOWER_NAME", class_basename(request.package).to_lowercase());
    }
    Ok(substitutions)
}

/// Writes `content` to `path`, creating missing parent directories.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
