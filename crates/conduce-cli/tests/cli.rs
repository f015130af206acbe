//! Smoke tests for the conduce binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("conduce")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_process_missing_file_fails() {
    Command::cargo_bin("conduce")
        .unwrap()
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_process_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, "Cliente: Juan Perez").unwrap();

    Command::cargo_bin("conduce")
        .unwrap()
        .args(["process", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_config_path_prints_location() {
    Command::cargo_bin("conduce")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn test_batch_with_no_matches_fails() {
    Command::cargo_bin("conduce")
        .unwrap()
        .args(["batch", "no-such-dir/*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files matched"));
}
