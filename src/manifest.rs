//! Source package manifest and the two manifests generated from it.

use crate::config::TemplateConfig;
use crate::constants::{PACKAGE_FILES, STRIPPED_MANIFEST_KEYS, TEMPLATE_KEYWORDS};
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// The parsed source package.json.
///
/// Kept as an ordered map so fields this tool does not know about (scripts,
/// dependencies, custom keys) survive untouched and in their original order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SourceManifest(IndexMap<String, Value>);

impl SourceManifest {
    /// Reads and parses a package.json file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `name` field, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&Value> {
        self.get("version")
    }

    pub fn description(&self) -> Option<&Value> {
        self.get("description")
    }

    /// The `keywords` array; any other shape counts as no keywords.
    pub fn keywords(&self) -> Vec<Value> {
        self.get("keywords").and_then(Value::as_array).cloned().unwrap_or_default()
    }

    /// The manifest as a JSON object, used as README rendering context.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

/// Generated package.json of the template package.
///
/// Field order is the serialized key order. Absent values are left out of the
/// output entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    pub keywords: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<Value>,
    pub files: Vec<String>,
}

impl PackageManifest {
    /// Builds the package manifest for `published_name`.
    ///
    /// Configured keywords and description take precedence over the source
    /// ones. `private` comes from the configuration only.
    pub fn new(source: &SourceManifest, config: &TemplateConfig, published_name: &str) -> Self {
        let mut keywords: Vec<Value> = match &config.keywords {
            Some(keywords) => keywords.iter().cloned().map(Value::String).collect(),
            None => source.keywords(),
        };
        keywords.extend(TEMPLATE_KEYWORDS.iter().map(|k| Value::String(k.to_string())));

        let description = match &config.description {
            Some(description) => Some(Value::String(description.clone())),
            None => source.description().cloned(),
        };

        Self {
            name: published_name.to_string(),
            version: source.version().cloned(),
            keywords,
            description,
            private: config.private.clone(),
            files: PACKAGE_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generated template.json: the source manifest without its package
/// metadata, nested under `package`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateManifest {
    pub package: IndexMap<String, Value>,
}

impl TemplateManifest {
    pub fn new(source: &SourceManifest) -> Self {
        let package = source
            .0
            .iter()
            .filter(|(key, _)| !STRIPPED_MANIFEST_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { package }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
