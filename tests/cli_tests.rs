// End-to-end tests for the dashfilter binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

const SNAPSHOT: &str = r#"{
  "pipelines": [
    {"name": "build-linux", "stages": [{"name": "compile", "status": "Building"}]},
    {"name": "build-mac", "stages": [{"name": "compile", "status": "Passed"}, {"name": "test", "status": "Failing"}]},
    {"name": "deploy-prod", "stages": [{"name": "deploy", "counter": 4, "status": "Failed"}]},
    {"name": "deploy-staging", "stages": [{"name": "deploy", "status": "Cancelled"}]},
    {"name": "nightly", "paused": true, "paused_by": "admin", "pause_reason": "flaky", "stages": [{"name": "run", "status": "Passed"}]},
    {"name": "new-pipeline", "stages": []}
  ]
}"#;

/// Helper to create a temporary home with a snapshot and set it as the data location
fn setup_test_env() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dashboard.json");
    fs::write(&snapshot_path, SNAPSHOT).unwrap();

    let config_dir = temp_dir.path().join(".dashfilter");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), format!("data.location={}\n", snapshot_path.display())).unwrap();
    temp_dir
}

/// Helper to create a new command with test environment
fn new_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dashfilter").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn matched_names(output: &[u8]) -> Vec<String> {
    let pipelines: Vec<serde_json::Value> = serde_json::from_slice(output).unwrap();
    pipelines.iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_no_state_shows_all() {
    let temp_dir = setup_test_env();

    let output = new_cmd(&temp_dir).arg("--json").output().unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout).len(), 6);
}

#[test]
fn test_building_includes_failing_in_progress() {
    let temp_dir = setup_test_env();

    let output = new_cmd(&temp_dir).args(["--state", "building", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout), vec!["build-linux", "build-mac"]);
}

#[test]
fn test_failing_matches_failed_stage_only() {
    let temp_dir = setup_test_env();

    let output = new_cmd(&temp_dir).args(["--state", "failing", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout), vec!["deploy-prod"]);
}

#[test]
fn test_multiple_states() {
    let temp_dir = setup_test_env();

    let output = new_cmd(&temp_dir).args(["-s", "paused,cancelled", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout), vec!["deploy-staging", "nightly"]);
}

#[test]
fn test_table_output() {
    let temp_dir = setup_test_env();

    new_cmd(&temp_dir)
        .args(["--state", "failing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("deploy-prod"))
        .stdout(predicate::str::contains("deploy/4"))
        .stdout(predicate::str::contains("build-linux").not());
}

#[test]
fn test_no_matches_message() {
    let temp_dir = setup_test_env();
    let snapshot = temp_dir.path().join("quiet.json");
    fs::write(&snapshot, r#"{"pipelines": [{"name": "green", "stages": [{"name": "s", "status": "Passed"}]}]}"#).unwrap();

    new_cmd(&temp_dir)
        .args(["--state", "building"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching pipelines."));
}

#[test]
fn test_snapshot_from_stdin() {
    let temp_dir = setup_test_env();

    let output = new_cmd(&temp_dir)
        .args(["--state", "cancelled", "--json", "-"])
        .write_stdin(SNAPSHOT)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout), vec!["deploy-staging"]);
}

#[test]
fn test_relative_data_location() {
    let temp_dir = setup_test_env();
    let config_dir = temp_dir.path().join(".dashfilter");
    fs::write(config_dir.join("local.json"), r#"{"pipelines": [{"name": "local", "paused": true}]}"#).unwrap();
    fs::write(config_dir.join("rc"), "data.location=local.json\n").unwrap();

    let output = new_cmd(&temp_dir).args(["--state", "paused", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(matched_names(&output.stdout), vec!["local"]);
}

#[test]
fn test_unknown_state_is_user_error() {
    let temp_dir = setup_test_env();

    new_cmd(&temp_dir)
        .args(["--state", "passed"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown status filter"));
}

#[test]
fn test_missing_snapshot_is_user_error() {
    let temp_dir = setup_test_env();

    new_cmd(&temp_dir)
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read dashboard snapshot"));
}

#[test]
fn test_malformed_snapshot_is_user_error() {
    let temp_dir = setup_test_env();
    let snapshot = temp_dir.path().join("broken.json");
    fs::write(&snapshot, "{ not json").unwrap();

    new_cmd(&temp_dir)
        .arg(&snapshot)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse dashboard snapshot"));
}

#[test]
fn test_version() {
    let temp_dir = setup_test_env();

    new_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
