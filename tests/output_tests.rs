use pretty_assertions::assert_eq;
use std::path::Path;
use phalanx_timings::output::{
    calls_column_width, render_table, sort_results, validate_path, write_table_file, SortKey,
};
use phalanx_timings::parser::ResultRecord;
use tempfile::NamedTempFile;

fn record(name: &str, run_time: f64, num_calls: u64, avg_time_per_call: f64) -> ResultRecord {
    ResultRecord {
        name: name.to_string(),
        run_time,
        num_calls,
        avg_time_per_call,
    }
}

fn sample_results() -> Vec<ResultRecord> {
    vec![
        record("Scatter", 3.0, 5, 0.6),
        record("Gather", 1.0, 500, 0.002),
        record("[Jacobian] Integrator_GradBasisDotVector: very long qualifier", 9.0, 50, 0.18),
    ]
}

#[test]
fn test_sorted_descending_for_every_key() {
    for key in [SortKey::AvgTimePerCall, SortKey::RunTime, SortKey::NumCalls] {
        let mut results = sample_results();
        sort_results(&mut results, key);

        for pair in results.windows(2) {
            assert!(
                key.compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater,
                "{:?} out of order under {:?}",
                pair,
                key
            );
        }
    }
}

#[test]
fn test_calls_scenario_order_and_width() {
    let mut results = sample_results();
    sort_results(&mut results, SortKey::NumCalls);

    let calls: Vec<u64> = results.iter().map(|r| r.num_calls).collect();
    assert_eq!(calls, vec![500, 50, 5]);
    assert_eq!(calls_column_width(&results), 8);
}

#[test]
fn test_wide_calls_column() {
    let results = vec![record("Hot", 1.0, 1_234_567_890, 1e-9)];
    assert_eq!(calls_column_width(&results), 10);

    let table = render_table(&results);
    let row = table.lines().nth(3).unwrap();
    assert!(row.contains(" 1234567890  Hot"));
}

#[test]
fn test_render_full_table() {
    let mut results = sample_results();
    sort_results(&mut results, SortKey::RunTime);

    let expected = [
        "  Average Time          Total    Total  Evaluator",
        "      per Call       Run Time    Calls  Name",
        "-------------- -------------- --------  ----------------------------------------",
        "  1.800000e-01   9.000000e+00       50  [Jacobian] Integrator_GradBasisDotVector: very long qualifier",
        "  6.000000e-01   3.000000e+00        5  Scatter",
        "  2.000000e-03   1.000000e+00      500  Gather",
        "",
    ]
    .join("\n");

    assert_eq!(render_table(&results), expected);
}

#[test]
fn test_render_empty_table() {
    let table = render_table(&[]);
    assert_eq!(table.lines().count(), 3);
}

#[test]
fn test_write_table_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let table = render_table(&sample_results());

    write_table_file(&table, temp_file.path()).unwrap();

    assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), table);
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/timings.txt");

    write_table_file("table\n", &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}
