//! Process-level tests for the command line tools

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_testgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_q15-testgen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run q15-testgen")
}

fn run_reference(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_q15-reference"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run q15-reference")
}

#[test]
fn test_missing_count_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = run_testgen(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(!dir.path().join("input.txt").exists());
}

#[test]
fn test_bad_counts_fail_without_output() {
    let dir = tempdir().unwrap();

    for arg in ["abc", "2.5", "-1", "40000"] {
        let output = run_testgen(dir.path(), &[arg]);
        assert!(!output.status.success(), "count {:?} was accepted", arg);
        assert!(!dir.path().join("input.txt").exists());
    }
}

#[test]
fn test_existing_file_untouched_on_bad_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "previous\n").unwrap();

    let output = run_testgen(dir.path(), &["nope"]);
    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
}

#[test]
fn test_zero_count() {
    let dir = tempdir().unwrap();
    let output = run_testgen(dir.path(), &["0"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("input.txt")).unwrap(),
        "0\n\n"
    );
}

#[test]
fn test_three_cases() {
    let dir = tempdir().unwrap();
    let output = run_testgen(dir.path(), &["3"]);
    assert!(output.status.success());

    let suite = q15_testgen::read_suite(dir.path().join("input.txt")).unwrap();
    assert_eq!(suite.len(), 3);
    assert!(suite.iter().all(|case| case.is_valid()));
}

#[test]
fn test_two_runs_differ() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");

    assert!(run_testgen(dir.path(), &["2"]).status.success());
    let first = fs::read_to_string(&path).unwrap();
    assert!(run_testgen(dir.path(), &["2"]).status.success());
    let second = fs::read_to_string(&path).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let dir = tempdir().unwrap();
    // A directory where the output file should go makes the create fail
    fs::create_dir(dir.path().join("input.txt")).unwrap();

    let output = run_testgen(dir.path(), &["1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("input.txt"));
}

const SAMPLE_SUITE: &str = "2\n\n2 3\n1 -1\n10 10\n\n1 2\n32767\n1\n\n";

#[test]
fn test_reference_writes_harness_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE_SUITE).unwrap();

    let output = run_reference(dir.path(), &[]);
    assert!(output.status.success());

    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "Test Case: 1\n13 7 \n13 7 \n\nTest Case: 2\n32767 \n32767 \n\n"
    );
}

#[test]
fn test_check_passes_matching_harness_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE_SUITE).unwrap();
    fs::write(
        dir.path().join("harness.txt"),
        "Test Case: 1\n13 7 \n13 7 \n\nTest Case: 2\n32767 \n32767 \n\n",
    )
    .unwrap();

    let output = run_reference(dir.path(), &["--check", "harness.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Test Case 1: PASS"), "{}", stdout);
    assert!(stdout.contains("Test Case 2: PASS"), "{}", stdout);
    // Checking never writes the expected output file
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_check_reports_failing_case() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE_SUITE).unwrap();
    // Second case wrapped around instead of saturating
    fs::write(
        dir.path().join("harness.txt"),
        "Test Case: 1\n13 7 \n13 7 \n\nTest Case: 2\n32767 \n-1 \n\n",
    )
    .unwrap();

    let output = run_reference(dir.path(), &["--check", "harness.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Test Case 1: PASS"), "{}", stdout);
    assert!(stdout.contains("Test Case 2: FAIL (max diff 32768)"), "{}", stdout);
}

#[test]
fn test_check_rejects_missing_cases() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE_SUITE).unwrap();
    fs::write(dir.path().join("harness.txt"), "Test Case: 1\n13 7 \n13 7 \n\n").unwrap();

    let output = run_reference(dir.path(), &["--check", "harness.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("has 1 test cases, suite has 2"));
}

#[test]
fn test_generated_suite_checks_against_its_expected_output() {
    let dir = tempdir().unwrap();
    assert!(run_testgen(dir.path(), &["3"]).status.success());
    assert!(run_reference(dir.path(), &["--output", "expected.txt"]).status.success());

    let output = run_reference(dir.path(), &["--check", "expected.txt"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("All 3 test cases passed"));
}

#[test]
fn test_reference_rejects_malformed_input() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.txt"), "1\n\n3 1\n1 2\n").unwrap();

    let output = run_reference(dir.path(), &["--input", "broken.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("output.txt").exists());
}
