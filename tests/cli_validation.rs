//! End-to-end CLI tests for the WiFi survey tool
//!
//! Usage errors must fail before any probe runs, and a zero-run invocation
//! must still produce a CSV export, so these paths are safe to exercise
//! without `ping` or `networkquality` being installed.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("wifi-survey").unwrap()
}

#[test]
fn test_room_is_required() {
    create_test_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--room"));
}

#[test]
fn test_help_lists_survey_flags() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--room"))
        .stdout(predicate::str::contains("--runs"))
        .stdout(predicate::str::contains("--wait"))
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--csv"));
}

#[test]
fn test_conflicting_color_flags_rejected() {
    let temp = TempDir::new().unwrap();

    create_test_cmd()
        .arg("--room")
        .arg("Hall")
        .arg("--color")
        .arg("--no-color")
        .arg("--database")
        .arg(temp.path().join("x.db"))
        .arg("--csv")
        .arg(temp.path().join("x.csv"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-color"));
}

#[test]
fn test_non_numeric_runs_rejected() {
    create_test_cmd()
        .arg("--room")
        .arg("Hall")
        .arg("--runs")
        .arg("many")
        .assert()
        .failure();
}

#[test]
fn test_zero_runs_exports_header_only_csv() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("survey.db");
    let csv_path = temp.path().join("survey.csv");

    create_test_cmd()
        .arg("--room")
        .arg("Lab")
        .arg("--runs")
        .arg("0")
        .arg("--no-color")
        .arg("--database")
        .arg(&db_path)
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 0 rows"));

    assert!(db_path.exists(), "database file must be created");
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv.trim_end(),
        "id,timestamp,room,local_latency_ms,internet_download_mbps,internet_upload_mbps"
    );
}

#[test]
fn test_database_path_from_environment() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("env.db");
    let csv_path = temp.path().join("env.csv");

    create_test_cmd()
        .env("WIFI_SURVEY_DB", &db_path)
        .env("WIFI_SURVEY_CSV", &csv_path)
        .arg("--room")
        .arg("Lab")
        .arg("--runs")
        .arg("0")
        .arg("--no-color")
        .assert()
        .success();

    assert!(db_path.exists());
    assert!(csv_path.exists());
}

#[test]
fn test_repeated_zero_run_invocations_accumulate_nothing() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("survey.db");
    let csv_path = temp.path().join("survey.csv");

    for _ in 0..2 {
        create_test_cmd()
            .arg("--room")
            .arg("Lab")
            .arg("--runs")
            .arg("0")
            .arg("--no-color")
            .arg("--database")
            .arg(&db_path)
            .arg("--csv")
            .arg(&csv_path)
            .assert()
            .success();
    }

    // Schema ensure is idempotent and the export is a full regeneration
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 1);
}
