//! packsmith is a code-scaffolding generator for application packages.
//! Given a package name and an artifact kind it creates the directory
//! skeleton and renders stub templates into it, substituting `$TOKEN$`
//! placeholders with derived names.

/// Single-artifact generation with the force/overwrite policy
pub mod artifact;

/// Command-line interface module for the packsmith application
pub mod cli;

/// Generator configuration
/// Supports JSON and YAML formats (packsmith.json, packsmith.yml, packsmith.yaml)
pub mod config;

/// Error types and handling for the packsmith application
pub mod error;

/// The closed set of generatable artifact kinds
pub mod kind;

/// Destination layout tables (scaffold folders, artifact sub-paths,
/// package-level file manifest)
pub mod layout;

/// Logger initialization
pub mod logger;

/// Derivation of class, namespace, lowercase and capitalized name variants
pub mod names;

/// Full-package orchestration
/// Combines all components to generate a complete package skeleton
pub mod package;

/// Destination path planning under the packages root
pub mod paths;

/// Package registry collaborator and its directory-backed implementation
pub mod registry;

/// Token substitution over stub templates
pub mod render;

/// Stub template store
pub mod stubs;
