use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use templetize::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("templetize")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--source", "./app", "--target", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source, PathBuf::from("./app"));
    assert_eq!(parsed.target, PathBuf::from("./out"));
    assert_eq!(parsed.config, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-i", "./app", "-o", "./out", "-c", "cfg.json", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source, PathBuf::from("./app"));
    assert_eq!(parsed.target, PathBuf::from("./out"));
    assert_eq!(parsed.config, Some(PathBuf::from("cfg.json")));
    assert!(parsed.verbose);
}

#[test]
fn test_missing_target() {
    let args = make_args(&["--source", "./app"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_positional_args_rejected() {
    let args = make_args(&["./app", "./out"]);
    assert!(Args::try_parse_from(args).is_err());
}
