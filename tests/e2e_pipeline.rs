// End-to-end tests for the batch pipeline.
//
// These tests exercise the real filesystem: a CSV input written to a temp
// directory, the real registry and pipeline, and the real append-only sinks.
// No mocks. This covers the full path from a raw CSV file on disk to the
// two classified log files.

use std::fs;
use std::path::{Path, PathBuf};

use paircalc::{Action, Error, RunParams, run_csv};

struct Workspace {
    _dir: tempfile::TempDir,
    input: PathBuf,
    params: RunParams,
}

/// A temp workspace with an input CSV and sink paths for one run.
fn workspace(action: Action, csv_rows: &str) -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("numbers.csv");
    fs::write(&input, csv_rows).unwrap();

    let params = RunParams {
        action,
        result_log: dir.path().join("result.csv"),
        diagnostic_log: dir.path().join("log.txt"),
    };

    Workspace {
        _dir: dir,
        input,
        params,
    }
}

fn lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap();
    assert!(
        content.is_empty() || content.ends_with("\r\n"),
        "log lines must be CRLF-terminated: {content:?}"
    );
    content
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn plus_run_routes_all_positive_results_to_result_sink() {
    let ws = workspace(Action::Plus, "72;-58\n-1;10\n5;0\n12;4\n");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.rows, 4);
    assert_eq!(report.valid, 4);
    assert_eq!(report.invalid, 0);

    assert_eq!(
        lines(&ws.params.result_log),
        vec![
            "Started plus operation",
            "72;-58;14",
            "-1;10;9",
            "5;0;5",
            "12;4;16",
            "Finished plus operation",
        ]
    );
    // Diagnostic sink holds only the markers.
    assert_eq!(
        lines(&ws.params.diagnostic_log),
        vec!["Started plus operation", "Finished plus operation"]
    );
}

#[test]
fn division_run_classifies_zero_divisor_as_wrong() {
    let ws = workspace(Action::Division, "5;0\n12;4\n");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.valid, 1);
    assert_eq!(report.invalid, 1);

    assert_eq!(
        lines(&ws.params.result_log),
        vec![
            "Started division operation",
            "12;4;3",
            "Finished division operation",
        ]
    );
    assert_eq!(
        lines(&ws.params.diagnostic_log),
        vec![
            "Started division operation",
            "Numbers 5 and 0 are wrong",
            "Finished division operation",
        ]
    );
}

#[test]
fn every_row_lands_in_exactly_one_sink() {
    let ws = workspace(Action::Minus, "10;3\n3;10\n8;8\n");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.rows, 3);

    let result_rows = lines(&ws.params.result_log).len() - 2;
    let diagnostic_rows = lines(&ws.params.diagnostic_log).len() - 2;
    assert_eq!(result_rows + diagnostic_rows, report.rows);
    assert_eq!(result_rows, 1); // 10-3=7
    assert_eq!(diagnostic_rows, 2); // 3-10=-7, 8-8=0
}

#[test]
fn rerun_truncates_previous_output() {
    let ws = workspace(Action::Plus, "1;1\n2;2\n3;3\n");
    run_csv(&ws.input, &ws.params).unwrap();

    // Second run over a shorter file must leave only its own output behind.
    fs::write(&ws.input, "4;4\n").unwrap();
    run_csv(&ws.input, &ws.params).unwrap();

    assert_eq!(
        lines(&ws.params.result_log),
        vec!["Started plus operation", "4;4;8", "Finished plus operation"]
    );
    assert_eq!(
        lines(&ws.params.diagnostic_log),
        vec!["Started plus operation", "Finished plus operation"]
    );
}

#[test]
fn malformed_fields_coerce_to_zero_instead_of_failing() {
    let ws = workspace(Action::Plus, "abc;9\n7\n 6 ; 2 \n");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(report.valid, 3);

    assert_eq!(
        lines(&ws.params.result_log),
        vec![
            "Started plus operation",
            "0;9;9",
            "7;0;7",
            "6;2;8",
            "Finished plus operation",
        ]
    );
}

#[test]
fn extreme_operands_still_produce_one_line_per_row() {
    let ws = workspace(Action::Plus, "9223372036854775807;1\n");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.rows, 1);
    assert_eq!(report.valid, 1);

    assert_eq!(
        lines(&ws.params.result_log),
        vec![
            "Started plus operation",
            "9223372036854775807;1;9223372036854775808",
            "Finished plus operation",
        ]
    );
}

#[test]
fn missing_input_file_fails_before_any_sink_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let params = RunParams {
        action: Action::Plus,
        result_log: dir.path().join("result.csv"),
        diagnostic_log: dir.path().join("log.txt"),
    };

    let err = run_csv(&dir.path().join("not_exists.csv"), &params).unwrap_err();
    assert!(matches!(err, Error::MissingDataFile { .. }));
    assert_eq!(err.to_string(), "Please define file with data");

    // Configuration errors must not open or truncate the sinks.
    assert!(!params.result_log.exists());
    assert!(!params.diagnostic_log.exists());
}

#[test]
fn empty_input_yields_markers_only() {
    let ws = workspace(Action::Multiply, "");

    let report = run_csv(&ws.input, &ws.params).unwrap();
    assert_eq!(report.rows, 0);

    let expected = vec!["Started multiply operation", "Finished multiply operation"];
    assert_eq!(lines(&ws.params.result_log), expected);
    assert_eq!(lines(&ws.params.diagnostic_log), expected);
}
