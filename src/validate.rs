//! Input validation performed before anything is written.

use crate::constants::PACKAGE_JSON;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Validated input paths of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub source: PathBuf,
    pub target: PathBuf,
    /// `source/package.json`
    pub manifest: PathBuf,
    pub config: Option<PathBuf>,
}

impl Inputs {
    /// Checks, in order, that the source directory, the target directory, the
    /// source package.json and (if given) the configuration file exist.
    ///
    /// # Errors
    /// The first failing check as one of the precondition variants of `Error`.
    pub fn resolve(source: &Path, target: &Path, config: Option<&Path>) -> Result<Self> {
        if !source.exists() {
            return Err(Error::SourceNotFound { source_dir: source.to_path_buf() });
        }
        if !target.exists() {
            return Err(Error::TargetNotFound { target_dir: target.to_path_buf() });
        }

        let manifest = source.join(PACKAGE_JSON);
        if !manifest.exists() {
            return Err(Error::ManifestNotFound { manifest_path: manifest });
        }

        let config = config.map(Path::to_path_buf);
        if let Some(config_path) = &config {
            if !config_path.exists() {
                return Err(Error::ConfigNotFound { config_path: config_path.clone() });
            }
        }

        debug!(
            "Inputs validated: source '{}', target '{}'",
            source.display(),
            target.display()
        );

        Ok(Self {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            manifest,
            config,
        })
    }
}
