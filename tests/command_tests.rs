use std::path::PathBuf;
use std::process::Command;
use phalanx_timings::aggregator::AggregateOptions;
use phalanx_timings::commands::{execute_report, validate_args, ReportArgs};
use phalanx_timings::output::SortKey;
use phalanx_timings::utils::error::ReportError;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/LastTest.log")
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_phalanx-timings"))
}

#[test]
fn test_validate_args_valid() {
    let args = ReportArgs {
        input: fixture_path(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_input() {
    let args = ReportArgs {
        input: PathBuf::from("does/not/exist.log"),
        ..Default::default()
    };

    let err = validate_args(&args).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_validate_args_directory_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    assert_eq!(validate_args(&args).unwrap_err().exit_code(), 2);
}

#[test]
fn test_validate_args_output_is_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        input: fixture_path(),
        output: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_report_writes_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("timings.txt");
    let args = ReportArgs {
        input: fixture_path(),
        output: Some(output.clone()),
        sort_key: SortKey::NumCalls,
        aggregate: AggregateOptions {
            by_base_name: true,
            by_eval_type: true,
        },
    };

    let report = execute_report(&args).unwrap();

    assert_eq!(report.malformed_rows, 1);
    assert_eq!(report.results.len(), 4);
    assert_eq!(report.results[0].name, "Gather Solution");
    assert_eq!(report.results[3].name, "DOF");

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, report.table);
    assert_eq!(written.lines().count(), 3 + 4);
}

#[test]
fn test_execute_report_without_section() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("empty.log");
    std::fs::write(&input, "Test Passed.\n").unwrap();

    let args = ReportArgs {
        input,
        ..Default::default()
    };

    let err = execute_report(&args).unwrap_err();
    assert_eq!(err.downcast_ref::<ReportError>().unwrap().exit_code(), 3);
}

#[test]
fn test_cli_prints_table_to_stdout() {
    let output = binary().arg("-i").arg(fixture_path()).arg("-e").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("  Average Time"));
    assert_eq!(stdout.lines().count(), 3 + 4);
    // Default ranking is by average time per call
    assert!(stdout.lines().nth(3).unwrap().ends_with("DOF: TEMPERATURE"));
}

#[test]
fn test_cli_unknown_option() {
    let output = binary().arg("--bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--bogus"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_cli_reports_malformed_rows_once() {
    let output = binary()
        .arg("-i")
        .arg(fixture_path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("1 malformed rows were skipped").count(), 1);
    assert!(!stderr.contains("Skipping row"));
}

#[test]
fn test_cli_missing_input() {
    let output = binary().args(["-i", "does/not/exist.log"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_cli_no_timing_section() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("plain.log");
    std::fs::write(&input, "nothing timed\n").unwrap();

    let output = binary().arg("-i").arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}
