//! End-to-end dispatch through the compiled binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_datashelf")
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("optimize")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: datashelf"));
}

#[test]
fn check_command_reports_record_count() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("datasets.json");
    fs::write(&path, r#"{"rows": [{"name": "A"}, {"name": "B"}]}"#)
        .expect("fixture should be writable");

    let output = Command::new(bin())
        .arg("check")
        .env("DATASHELF_DATA", &path)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 records"));
}

#[test]
fn check_command_fails_on_missing_file() {
    let dir = TempDir::new().expect("tempdir");

    let output = Command::new(bin())
        .arg("check")
        .env("DATASHELF_DATA", dir.path().join("absent.json"))
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn validate_command_reports_warnings_without_failing() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("datasets.json");
    fs::write(&path, r#"[{"name": "A", "link": "ftp://x.org"}]"#)
        .expect("fixture should be writable");

    let output = Command::new(bin())
        .arg("validate")
        .env("DATASHELF_DATA", &path)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[warning]"));
}
