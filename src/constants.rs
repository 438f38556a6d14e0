//! Common constants used throughout templetize.

/// Manifest file of the source project, also the generated package manifest.
pub const PACKAGE_JSON: &str = "package.json";

/// Generated template manifest consumed by create-react-app.
pub const TEMPLATE_JSON: &str = "template.json";

pub const README: &str = "README.md";

/// Subdirectory holding the copied project resources.
pub const TEMPLATE_DIR: &str = "template";

pub const GITIGNORE: &str = ".gitignore";

/// `.gitignore` is stripped by npm on publish, so it ships under this name.
pub const GITIGNORE_RENAMED: &str = "gitignore";

/// Prefix prepended to every derived template name.
pub const TEMPLATE_NAME_PREFIX: &str = "cra-template-";

/// Keywords appended to the generated package manifest.
pub const TEMPLATE_KEYWORDS: [&str; 2] = ["cra-template", "react"];

/// Value of `files` in the generated package manifest.
pub const PACKAGE_FILES: [&str; 2] = [TEMPLATE_DIR, TEMPLATE_JSON];

/// Source-relative paths never copied into the template tree.
pub const SKIP_PATHS: [&str; 8] = [
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "npm.lock",
    ".gitignore",
    "node_modules",
    "dist",
    "template-config.json",
];

/// Manifest keys that describe the template package itself and are stripped
/// from `template.json`.
pub const STRIPPED_MANIFEST_KEYS: [&str; 9] = [
    "name",
    "version",
    "keywords",
    "description",
    "author",
    "license",
    "contributors",
    "homepage",
    "private",
];

/// README written when no custom one is configured.
pub const README_TEMPLATE: &str = r#"
# Create react app template for {{name}}

{{description}}

### How to use this template.

Run following command to create a project with this template.
```shell
npx create-react-app <project-name> --template {{name}}
```
"#;
