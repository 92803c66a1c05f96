use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_keeps_everything_unset() {
    assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
}

#[test]
fn parses_separate_and_inline_values() {
    let cli = parse_args(args(&[
        "--api-base",
        "http://files.local:9000",
        "--download-dir=/tmp/dl",
    ]))
    .unwrap();

    assert_eq!(cli.api_base.as_deref(), Some("http://files.local:9000"));
    assert_eq!(cli.download_dir, Some(PathBuf::from("/tmp/dl")));
}

#[test]
fn missing_value_is_an_error() {
    let err = parse_args(args(&["--api-base"])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn unknown_argument_is_an_error() {
    let err = parse_args(args(&["--verbose"])).unwrap_err();
    assert!(err.to_string().contains("--verbose"));
}

#[test]
fn help_and_version_flags() {
    assert!(parse_args(args(&["-h"])).unwrap().help);
    assert!(parse_args(args(&["--version"])).unwrap().version);
}

#[test]
fn command_line_overrides_settings() {
    let mut settings = Settings {
        api_base: "http://from-settings:1".to_string(),
        download_dir: Some(PathBuf::from("/settings/dir")),
        ..Settings::default()
    };
    let cli = parse_args(args(&["--api-base", "http://from-cli:2"])).unwrap();

    apply_cli(&mut settings, &cli);

    assert_eq!(settings.api_base, "http://from-cli:2");
    assert_eq!(settings.download_dir, Some(PathBuf::from("/settings/dir")));
}
