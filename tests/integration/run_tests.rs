use clap::Parser;
use hashdupe::cli::Cli;
use hashdupe::config::ConfigError;
use hashdupe::error::ExitCode;
use hashdupe::input::InputError;
use hashdupe::output::ReportError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use crate::ENV_MUTEX;

/// Build a CLI pointing at an empty config file so the user's own
/// configuration never leaks into a test.
fn cli(config_dir: &Path, args: &[&str]) -> Cli {
    let config = config_dir.join("config.toml");
    fs::write(&config, "").unwrap();

    let mut argv = vec!["hashdupe", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_run_app_default_output_next_to_input() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("hashes.csv");
    fs::write(&input, "photo1.jpg,H1\nphoto.jpg,H1\n").unwrap();

    let code = hashdupe::run_app(cli(dir.path(), &["--csv", input.to_str().unwrap()])).unwrap();

    assert_eq!(code, ExitCode::Success);
    let report = fs::read_to_string(dir.path().join("duplicates.txt")).unwrap();
    assert_eq!(report, "photo1.jpg\n");
}

#[test]
fn test_run_app_custom_output_and_debug() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("hashes.csv");
    fs::write(&input, "photo1.jpg,H1\nphoto.jpg,H1\n").unwrap();

    hashdupe::run_app(cli(
        dir.path(),
        &["--csv", input.to_str().unwrap(), "--out", "review.txt", "--debug"],
    ))
    .unwrap();

    let report = fs::read_to_string(dir.path().join("review.txt")).unwrap();
    assert!(report.starts_with("Keep: photo.jpg\n"));
    assert!(report.contains("\n  photo1.jpg\n"));
}

#[test]
fn test_run_app_missing_input_is_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();

    let err = hashdupe::run_app(cli(dir.path(), &[])).unwrap_err();

    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert_eq!(ExitCode::for_error(&err), ExitCode::ConfigError);
}

#[test]
fn test_run_app_missing_input_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.csv");

    let err =
        hashdupe::run_app(cli(dir.path(), &["--csv", input.to_str().unwrap()])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Open { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::GeneralError);
    assert!(!dir.path().join("duplicates.txt").exists());
}

#[test]
fn test_run_app_parse_error_writes_nothing() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("hashes.csv");
    fs::write(&input, b"a.txt,H1\n\xff.txt,H1\n").unwrap();

    let err =
        hashdupe::run_app(cli(dir.path(), &["--csv", input.to_str().unwrap()])).unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::ParseError);
    assert!(!dir.path().join("duplicates.txt").exists());
}

#[test]
fn test_run_app_output_cannot_be_created() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("hashes.csv");
    fs::write(&input, "a,H1\nbb,H1\n").unwrap();

    let err = hashdupe::run_app(cli(
        dir.path(),
        &["--csv", input.to_str().unwrap(), "--out", "no/such/dir/out.txt"],
    ))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::Create { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::GeneralError);
}

#[test]
fn test_run_app_error_message_names_input() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("gone.csv");

    let err =
        hashdupe::run_app(cli(dir.path(), &["--csv", input.to_str().unwrap()])).unwrap_err();

    assert!(format!("{err:#}").contains("gone.csv"));
}

#[test]
fn test_run_app_unterminated_quote_writes_nothing() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let input = dir.path().join("hashes.csv");
    fs::write(&input, "\"photo1.jpg,H1\nphoto.jpg,H1\nx.jpg,H2\nxx.jpg,H2\n").unwrap();

    let err =
        hashdupe::run_app(cli(dir.path(), &["--csv", input.to_str().unwrap()])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::UnterminatedQuote { line: 1 })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ParseError);
    assert_eq!(ExitCode::for_error(&err).as_i32(), 3);
    assert!(!dir.path().join("duplicates.txt").exists());
}
