//! Error handling for the packsmith application.
//! Defines the custom error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for packsmith operations.
///
/// This enum represents all possible errors that can occur during package
/// and artifact generation. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stub asset for an artifact kind is missing or unreadable
    #[error("template '{key}' not found (looked in '{path}')")]
    TemplateNotFound { key: String, path: String },

    /// The destination file already exists and no force flag was given
    #[error("'{path}' already exists! Use --force to overwrite")]
    ArtifactExists { path: String },

    /// The package is already present in the registry
    #[error("package '{name}' already exists!")]
    PackageExists { name: String },

    /// Represents errors in the layout tables or configuration files
    #[error("configuration error: {0}")]
    Config(String),

    /// Represents errors bubbling up from the package registry
    #[error("registry error: {0}")]
    Registry(String),
}

/// Convenience type alias for Results with packsmith's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
