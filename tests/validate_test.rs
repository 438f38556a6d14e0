use std::fs;

use templetize::error::Error;
use templetize::validate::Inputs;
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("app/package.json"), r#"{"name": "pkg"}"#).unwrap();
    dir
}

#[test]
fn test_valid_inputs() {
    let dir = project();
    let inputs = Inputs::resolve(&dir.path().join("app"), &dir.path().join("out"), None).unwrap();
    assert_eq!(inputs.manifest, dir.path().join("app/package.json"));
    assert_eq!(inputs.config, None);
}

#[test]
fn test_missing_source() {
    let dir = project();
    let err = Inputs::resolve(&dir.path().join("nope"), &dir.path().join("out"), None);
    assert!(matches!(err, Err(Error::SourceNotFound { .. })));
}

#[test]
fn test_missing_target() {
    let dir = project();
    let err = Inputs::resolve(&dir.path().join("app"), &dir.path().join("nope"), None);
    assert!(matches!(err, Err(Error::TargetNotFound { .. })));
}

#[test]
fn test_missing_manifest() {
    let dir = project();
    fs::remove_file(dir.path().join("app/package.json")).unwrap();
    let err = Inputs::resolve(&dir.path().join("app"), &dir.path().join("out"), None);
    assert!(matches!(err, Err(Error::ManifestNotFound { .. })));
}

#[test]
fn test_missing_config() {
    let dir = project();
    let config = dir.path().join("cfg.json");
    let err =
        Inputs::resolve(&dir.path().join("app"), &dir.path().join("out"), Some(config.as_path()));
    assert!(matches!(err, Err(Error::ConfigNotFound { .. })));
}

#[test]
fn test_source_checked_before_target() {
    let dir = TempDir::new().unwrap();
    let err = Inputs::resolve(&dir.path().join("a"), &dir.path().join("b"), None);
    assert!(matches!(err, Err(Error::SourceNotFound { .. })));
}
