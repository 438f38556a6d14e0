//! Template package generation.
//! Runs the whole transformation from a project directory to a template
//! package directory: validation, naming, directory reset, manifests,
//! resources and README.

use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{load_config, LoadedConfig, TemplateConfig},
    constants::{
        GITIGNORE, GITIGNORE_RENAMED, PACKAGE_JSON, README, README_TEMPLATE, SKIP_PATHS,
        TEMPLATE_DIR, TEMPLATE_JSON,
    },
    error::{Error, Result},
    fsutil::{copy_file, copy_tree, normalize_relative, reset_dir},
    manifest::{PackageManifest, SourceManifest, TemplateManifest},
    naming::{derive_name, DerivedName},
    renderer::TemplateRenderer,
    validate::Inputs,
};

/// Source-relative path prefixes excluded from the general copy.
#[derive(Debug, Clone, Default)]
pub struct SkipRules {
    prefixes: Vec<PathBuf>,
}

impl SkipRules {
    /// Fixed skip-list, configured excludes and the configured README path.
    pub fn new(config: &TemplateConfig) -> Self {
        let prefixes = SKIP_PATHS
            .iter()
            .map(|p| p.to_string())
            .chain(config.exclude.iter().flatten().cloned())
            .chain(config.readme.iter().cloned())
            .map(|p| normalize_relative(Path::new(&p)))
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        Self { prefixes }
    }

    pub fn add<P: Into<PathBuf>>(&mut self, prefix: P) {
        self.prefixes.push(prefix.into());
    }

    /// Whether `relative` starts with one of the prefixes. The comparison is
    /// textual: `dist` also skips `distribution/` and `dist-old`.
    pub fn is_skipped(&self, relative: &Path) -> bool {
        let relative = relative.to_string_lossy();
        self.prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.to_string_lossy().as_ref()))
    }
}

/// Directory of the generated template package. Scoped names are not nested
/// under a scope directory.
pub fn template_dir_path(target: &Path, name: &DerivedName) -> PathBuf {
    target.join(&name.template_name)
}

/// Name used for derivation: the configured one, else the manifest's.
pub fn configured_name<'a>(
    config: &'a TemplateConfig,
    manifest: &'a SourceManifest,
) -> Result<&'a str> {
    config.name.as_deref().or_else(|| manifest.name()).ok_or(Error::MissingName)
}

/// Writes package.json and template.json into `template_dir`.
pub fn write_manifests(
    template_dir: &Path,
    manifest: &SourceManifest,
    config: &TemplateConfig,
    name: &DerivedName,
) -> Result<()> {
    let package = PackageManifest::new(manifest, config, &name.published_name());
    let package_path = template_dir.join(PACKAGE_JSON);
    debug!("Writing file: {}", package_path.display());
    fs::write(package_path, package.to_json()?)?;

    let template = TemplateManifest::new(manifest);
    let template_path = template_dir.join(TEMPLATE_JSON);
    debug!("Writing file: {}", template_path.display());
    fs::write(template_path, template.to_json()?)?;
    Ok(())
}

/// Copies the configured includes, then the filtered source tree, then the
/// renamed `.gitignore` into `template_dir/template`.
///
/// Files written by the include step are never overwritten afterwards.
pub fn copy_resources(source: &Path, template_dir: &Path, config: &TemplateConfig) -> Result<()> {
    let resources_dir = template_dir.join(TEMPLATE_DIR);
    fs::create_dir(&resources_dir)?;

    let mut included: HashSet<PathBuf> = HashSet::new();
    for include in config.include.iter().flatten() {
        let include_path = source.join(include);
        if !include_path.exists() {
            warn!("Included path '{}' does not exist, skipping", include_path.display());
            continue;
        }
        let Some(basename) = normalize_relative(Path::new(include)).file_name().map(PathBuf::from)
        else {
            warn!("Included path '{include}' has no file name, skipping");
            continue;
        };
        debug!("Including '{}'", include_path.display());
        included.extend(copy_tree(&include_path, &resources_dir.join(basename), |_| true)?);
    }

    let mut rules = SkipRules::new(config);
    if let Some(inside) = nested_output(source, template_dir) {
        debug!("Skipping output directory '{}' inside source", inside.display());
        rules.add(inside);
    }

    copy_tree(source, &resources_dir, |relative| {
        !rules.is_skipped(relative) && !included.contains(&resources_dir.join(relative))
    })?;

    let gitignore = source.join(GITIGNORE);
    if gitignore.exists() {
        debug!("Copying '{}' as '{}'", GITIGNORE, GITIGNORE_RENAMED);
        copy_file(&gitignore, &resources_dir.join(GITIGNORE_RENAMED))?;
    }
    Ok(())
}

/// Source-relative location of `template_dir` when it lies inside `source`.
fn nested_output(source: &Path, template_dir: &Path) -> Option<PathBuf> {
    let source = source.canonicalize().ok()?;
    let template_dir = template_dir.canonicalize().ok()?;
    template_dir.strip_prefix(&source).ok().map(Path::to_path_buf)
}

/// Copies the configured README, or renders the default one from the
/// source manifest.
pub fn write_readme(
    engine: &dyn TemplateRenderer,
    template_dir: &Path,
    manifest: &SourceManifest,
    config: &LoadedConfig,
) -> Result<()> {
    let readme_dest = template_dir.join(README);

    if let Some(custom) = config.readme_path() {
        if custom.is_file() {
            debug!("Copying README from '{}'", custom.display());
            fs::copy(&custom, &readme_dest)?;
            return Ok(());
        }
        warn!("README '{}' not found, generating default", custom.display());
    }

    let content = engine.render(README_TEMPLATE, &manifest.to_value())?;
    debug!("Writing file: {}", readme_dest.display());
    fs::write(readme_dest, content)?;
    Ok(())
}

/// Drives one templetize run.
pub struct Templetizer<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Templetizer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Generates the template package for `source` under `target`.
    ///
    /// Nothing is written unless all inputs validate.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - the generated template package directory
    pub fn run(&self, source: &Path, target: &Path, config: Option<&Path>) -> Result<PathBuf> {
        let inputs = Inputs::resolve(source, target, config)?;

        let manifest = SourceManifest::read(&inputs.manifest)?;
        let config = load_config(inputs.config.as_deref())?;
        let name = derive_name(configured_name(&config.config, &manifest)?);
        let template_dir = template_dir_path(&inputs.target, &name);

        debug!(
            "Generating '{}' in '{}'",
            name.published_name(),
            template_dir.display()
        );

        reset_dir(&template_dir)?;
        write_manifests(&template_dir, &manifest, &config.config, &name)?;
        copy_resources(&inputs.source, &template_dir, &config.config)?;
        write_readme(self.engine, &template_dir, &manifest, &config)?;

        Ok(template_dir)
    }
}
