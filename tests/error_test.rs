use std::io;
use std::path::PathBuf;

use templetize::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::SourceNotFound { source_dir: PathBuf::from("app") };
    assert_eq!(err.to_string(), "Cannot find source directory: 'app'");

    let err = Error::TargetNotFound { target_dir: PathBuf::from("out") };
    assert_eq!(err.to_string(), "Cannot find target directory: 'out'");

    let err = Error::ConfigParseError("bad".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad.");
}

#[test]
fn test_precondition_messages() {
    let err = Error::ManifestNotFound { manifest_path: PathBuf::from("p") };
    assert_eq!(err.to_string(), "Cannot find source package json: 'p'");

    let err = Error::ConfigNotFound { config_path: PathBuf::from("c") };
    assert_eq!(err.to_string(), "Invalid configuration: 'c'");
}
