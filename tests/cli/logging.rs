use crate::support::{bertha_in, setup_root};
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .args(["--log-level", "debug", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("session_initialized"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .args(["--verbose", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .args(["--verbose", "--log-json", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"parse_args\""))
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .args(["--verbose", "--format", "json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_args").not());
}
