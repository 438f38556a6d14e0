//! Template name derivation.

use crate::constants::TEMPLATE_NAME_PREFIX;
use regex::Regex;
use std::sync::OnceLock;

fn scoped_name_regex() -> &'static Regex {
    static SCOPED: OnceLock<Regex> = OnceLock::new();
    SCOPED.get_or_init(|| Regex::new(r"^@([^/]+)/([^/]+)$").expect("valid scoped name regex"))
}

/// Template name derived from a package name, plus its npm scope if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// `cra-template-<name>`, also the template directory name.
    pub template_name: String,
    pub scope: Option<String>,
}

impl DerivedName {
    /// Name written into the generated package.json.
    pub fn published_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("@{}/{}", scope, self.template_name),
            None => self.template_name.clone(),
        }
    }
}

/// Derives the template name from a package name.
///
/// `@scope/name` keeps its scope and prefixes the local part. Anything else,
/// including malformed scoped names, is prefixed as a whole.
pub fn derive_name(name: &str) -> DerivedName {
    match scoped_name_regex().captures(name) {
        Some(caps) => DerivedName {
            template_name: format!("{}{}", TEMPLATE_NAME_PREFIX, &caps[2]),
            scope: Some(caps[1].to_string()),
        },
        None => DerivedName {
            template_name: format!("{TEMPLATE_NAME_PREFIX}{name}"),
            scope: None,
        },
    }
}
