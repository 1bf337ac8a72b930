use crate::support::{bertha, bertha_in, setup_root, write_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Status command tests
// ============================================================================

#[test]
fn test_status_fresh_root() {
    let dir = setup_root(&["s2", "s1", "notes"]);

    bertha_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("marked: 0/2"))
        .stdout(predicate::str::contains("next: s1"));
}

#[test]
fn test_status_json() {
    let dir = setup_root(&["s1", "s2"]);
    write_file(
        dir.path(),
        "bertha-state.json",
        r#"{"version": 1, "marked": ["s1"]}"#,
    );

    let output = bertha_in(&dir)
        .args(["--format", "json", "status"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["marked"], 1);
    assert_eq!(json["next"], "s2");
    assert_eq!(json["complete"], false);
}

#[test]
fn test_status_accepts_bare_array_state() {
    let dir = setup_root(&["s1", "s2"]);
    write_file(dir.path(), "bertha-state.json", r#"["s1", "s2"]"#);

    bertha_in(&dir)
        .args(["--quiet", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked: 2/2"))
        .stdout(predicate::str::contains("all submissions marked"))
        .stdout(predicate::str::contains("root:").not());
}

#[test]
fn test_status_root_from_env() {
    let dir = setup_root(&["s7"]);

    bertha()
        .env("BERTHA_ROOT", dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("next: s7"));
}

#[test]
fn test_status_missing_root_is_data_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");

    bertha()
        .arg("--root")
        .arg(&missing)
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("submission root not found"));
}

#[test]
fn test_status_corrupt_state_is_data_error() {
    let dir = setup_root(&["s1"]);
    write_file(dir.path(), "bertha-state.json", "{not json");

    bertha_in(&dir)
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreadable"));

    // The broken file is left for the grader to inspect
    let content = fs::read_to_string(dir.path().join("bertha-state.json")).unwrap();
    assert_eq!(content, "{not json");
}

#[test]
fn test_status_state_override() {
    let dir = setup_root(&["s1"]);
    let elsewhere = tempdir().unwrap();
    let state = elsewhere.path().join("progress.json");
    fs::write(&state, r#"["s1"]"#).unwrap();

    bertha_in(&dir)
        .arg("--state")
        .arg(&state)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("marked: 1/1"));
}
