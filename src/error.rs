//! Error handling for templetize.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for templetize operations.
///
/// The first four variants are precondition failures detected before anything
/// is written to the target directory. Everything else is fatal and may leave a
/// partially populated template directory behind.
#[derive(Error, Debug)]
pub enum Error {
    /// The source project directory does not exist.
    #[error("Cannot find source directory: '{}'", source_dir.display())]
    SourceNotFound { source_dir: PathBuf },

    /// The target directory does not exist.
    #[error("Cannot find target directory: '{}'", target_dir.display())]
    TargetNotFound { target_dir: PathBuf },

    /// The source project has no package.json.
    #[error("Cannot find source package json: '{}'", manifest_path.display())]
    ManifestNotFound { manifest_path: PathBuf },

    /// A configuration path was supplied but does not exist.
    #[error("Invalid configuration: '{}'", config_path.display())]
    ConfigNotFound { config_path: PathBuf },

    /// Neither the configuration nor the source manifest provides a name.
    #[error("Cannot derive template name: no 'name' in configuration or source package json")]
    MissingName,

    /// The configuration file is neither valid JSON nor valid YAML.
    #[error("Configuration error: {0}.")]
    ConfigParseError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Malformed or unserializable JSON (source manifest, generated manifests).
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// README rendering failures.
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Failures while walking the source tree.
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),
}

/// Convenience type alias for Results with templetize's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
