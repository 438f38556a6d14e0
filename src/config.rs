//! Template configuration handling.
//! The configuration file selects extra inclusions and exclusions and overrides
//! some of the metadata taken from the source package.json.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// User supplied template configuration. Every field is optional and
/// unrecognized keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Overrides the source package name when deriving the template name.
    pub name: Option<String>,
    /// Source-relative paths force-copied into the template tree.
    pub include: Option<Vec<String>>,
    /// Source-relative paths skipped by the general copy.
    pub exclude: Option<Vec<String>>,
    /// Custom README, relative to the configuration file's directory.
    pub readme: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Copied verbatim into package.json; an explicit `null` stays `null`.
    #[serde(deserialize_with = "deserialize_present")]
    pub private: Option<Value>,
    pub description: Option<String>,
}

/// Maps any present value, `null` included, to `Some`. Absent keys fall back
/// to `None` through `#[serde(default)]`.
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Configuration together with the directory its relative paths resolve against.
#[derive(Debug, Default, Clone)]
pub struct LoadedConfig {
    pub config: TemplateConfig,
    /// Parent directory of the configuration file, `None` without a file.
    pub base_dir: Option<PathBuf>,
}

impl LoadedConfig {
    /// Absolute (or cwd-relative) location of the configured custom README.
    pub fn readme_path(&self) -> Option<PathBuf> {
        let readme = self.config.readme.as_ref()?;
        let base_dir = self.base_dir.as_ref()?;
        Some(base_dir.join(readme))
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigParseError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<TemplateConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            debug!("Configuration is not JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content).map_err(|yaml_err| {
                Error::ConfigParseError(format!(
                    "invalid configuration format: {json_err} (as YAML: {yaml_err})"
                ))
            })
        }
    }
}

/// Loads the configuration file at `config_path`, or the default
/// configuration when no path is given.
pub fn load_config<P: AsRef<Path>>(config_path: Option<P>) -> Result<LoadedConfig> {
    let Some(config_path) = config_path else {
        debug!("No configuration file given, using defaults");
        return Ok(LoadedConfig::default());
    };
    let config_path = config_path.as_ref();

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path)?;
    let config = parse_config(&content)?;

    let base_dir = config_path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(LoadedConfig { config, base_dir: Some(base_dir) })
}
