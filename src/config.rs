//! Configuration handling for packsmith.
//! Loads generator settings from an optional configuration file, with
//! sensible defaults for every field.

use crate::error::{Error, Result};
use crate::layout::Layout;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, probed in order in the working
/// directory when no explicit path is given.
pub const CONFIG_FILES: [&str; 3] = ["packsmith.json", "packsmith.yml", "packsmith.yaml"];

/// Generator configuration.
///
/// Every field has a default matching the standard layout, so an empty or
/// absent configuration file yields a fully working generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory that holds all generated packages
    pub packages_root: PathBuf,
    /// Directory containing the `.stub` template assets
    pub stubs_dir: PathBuf,
    /// Namespace separator of the generated source language
    pub namespace_separator: String,
    /// File extension of generated source files
    pub source_extension: String,
    /// When set, package-level file creation refuses to overwrite existing
    /// files unless the force flag is given. Off by default: the standard
    /// behavior overwrites package files unconditionally.
    pub files_respect_force: bool,
    /// Destination layout tables
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_root: PathBuf::from("packages"),
            stubs_dir: PathBuf::from("stubs"),
            namespace_separator: "\\".to_string(),
            source_extension: "php".to_string(),
            files_respect_force: false,
            layout: Layout::default(),
        }
    }
}

/// Parses configuration content, trying JSON first and YAML as fallback.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid configuration format: {e}"))),
    }
}

/// Loads the generator configuration.
///
/// With an explicit `path` the file must exist and parse. Otherwise the
/// [`CONFIG_FILES`] candidates are probed in the working directory and the
/// first match is used; when none exists the defaults are returned.
pub fn get_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        return parse_config(&content);
    }

    for candidate in CONFIG_FILES {
        let candidate = Path::new(candidate);
        if candidate.exists() {
            debug!("loading configuration from {}", candidate.display());
            let content = std::fs::read_to_string(candidate)?;
            return parse_config(&content);
        }
    }

    debug!("no configuration file found, using defaults");
    Ok(Config::default())
}
