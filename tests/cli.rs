//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_usage_and_options() {
    let mut cmd = Command::cargo_bin("nexir").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--tone"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_saved_with_empty_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("nexir").unwrap();
    cmd.arg("saved")
        .env("NEXIR_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved names yet."));
}

#[test]
fn test_missing_api_key_is_a_clean_error() {
    let mut cmd = Command::cargo_bin("nexir").unwrap();
    cmd.args(["solar battery", "--style", "brandable", "--length", "short", "--tone", "serious"])
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_invalid_tone_is_rejected() {
    let mut cmd = Command::cargo_bin("nexir").unwrap();
    cmd.args(["solar battery", "--tone", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tone"));
}
