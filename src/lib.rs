//! templetize turns an existing project directory into a create-react-app
//! template package: a generated package.json and template.json, a README and
//! a filtered copy of the project's files.

/// Command-line interface module for the templetize application
pub mod cli;

/// Template configuration file handling
pub mod config;

/// Fixed file names, skip-list and the default README
pub mod constants;

/// Error types and handling for the templetize application
pub mod error;

/// Directory reset and recursive copy helpers
pub mod fsutil;

/// Source package manifest and the generated manifests
pub mod manifest;

/// Template name derivation from package names
pub mod naming;

/// Core orchestration of the template package generation
pub mod processor;

/// README rendering
pub mod renderer;

/// Input path validation
pub mod validate;
