//! Tests for parallel CLI processing of multiple files.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

#[rstest]
fn test_cli_parallel_empty_stdin() {
    let output = crmfix().write_stdin("").output().expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
}

#[rstest]
fn test_cli_parallel_multiple_files() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        let path = write_file(dir.path(), &format!("file{i}.txt"), &format!("word{i} alpha beta\n"));
        expected.push_str(&format!("word{i}\nalpha beta\n"));
        files.push(path);
    }

    let output = crmfix()
        .args(["--width", "10"])
        .args(&files)
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[rstest]
fn test_cli_parallel_missing_file_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = write_file(dir.path(), "good.txt", "one two three\n");
    let missing = dir.path().join("missing.txt");

    let output = crmfix()
        .args(["--width", "7"])
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "one two\nthree\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[rstest]
fn test_cli_parallel_in_place() {
    let dir = tempdir().expect("failed to create temporary directory");
    let files: Vec<_> = (0..3)
        .map(|i| write_file(dir.path(), &format!("note{i}.txt"), "aa bb cc\n"))
        .collect();

    crmfix()
        .args(["--in-place", "--width", "5"])
        .args(&files)
        .assert()
        .success();

    for path in &files {
        assert_eq!(fs::read_to_string(path).expect("failed to read file"), "aa bb\ncc\n");
    }
}

#[rstest]
fn test_cli_parallel_missing_file_in_place() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = write_file(dir.path(), "good.txt", "aa bb cc\n");
    let missing = dir.path().join("missing.txt");

    let output = crmfix()
        .arg("--in-place")
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}
