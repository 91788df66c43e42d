use clap::Parser;
use create_module::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("create-module")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.module_dir, None);
    assert!(!parsed.debug);
    assert!(!parsed.verbose);
}

#[test]
fn test_module_dir() {
    let parsed = Args::try_parse_from(make_args(&["--module-dir", "./m"])).unwrap();

    assert_eq!(parsed.module_dir, Some(PathBuf::from("./m")));
}

#[test]
fn test_all_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["--module-dir", "./out", "--debug", "--verbose"]))
            .unwrap();

    assert_eq!(parsed.module_dir, Some(PathBuf::from("./out")));
    assert!(parsed.debug);
    assert!(parsed.verbose);
}

#[test]
fn test_short_verbose() {
    let parsed = Args::try_parse_from(make_args(&["-v"])).unwrap();

    assert!(parsed.verbose);
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--unknown"])).is_err());
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}
