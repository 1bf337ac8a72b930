use crate::support::{bertha_in, setup_root, write_file};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Mark command tests
// ============================================================================

#[test]
fn test_mark_save_writes_feedback() {
    let dir = setup_root(&["s1", "s2"]);

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\n- 1.1\n- 2.1\n- 2.1\nc Tidy up the loop\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] s1 marked: false"))
        .stdout(predicate::str::contains("saved"))
        .stdout(predicate::str::contains("[1/2] s1 marked: true"));

    let feedback = fs::read_to_string(dir.path().join("s1").join("s1.feedback")).unwrap();
    assert_eq!(
        feedback,
        "Style: 9/10\nCorrectness: 3/5\nGeneral Comments: Tidy up the loop"
    );

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("bertha-state.json")).unwrap())
            .unwrap();
    assert_eq!(state["version"], 1);
    assert_eq!(state["marked"], serde_json::json!(["s1"]));
}

#[test]
fn test_mark_resumes_after_restart() {
    let dir = setup_root(&["s1", "s2", "s3"]);

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\nsave\nnext\nskip\nquit\n")
        .assert()
        .success();

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2/3 marked"))
        .stdout(predicate::str::contains("[3/3] s3 marked: false"));

    assert!(dir.path().join("s1").join("s1.feedback").exists());
    assert!(!dir.path().join("s2").join("s2.feedback").exists());
}

#[test]
fn test_mark_reports_completion() {
    let dir = setup_root(&["s1"]);
    write_file(dir.path(), "bertha-state.json", r#"["s1"]"#);

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All submissions are marked."));
}

#[test]
fn test_mark_command_errors_do_not_exit() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("save\n- 4.4\nview\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "error: no submission is currently selected",
        ))
        .stdout(predicate::str::contains("error: no criterion 4.4 in the rubric"));
}

#[test]
fn test_mark_without_editor_reports_on_view() {
    let dir = setup_root(&["s1"]);

    bertha_in(&dir)
        .arg("mark")
        .write_stdin("next\nview\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: no editor configured"));
}

#[test]
fn test_mark_bad_rubric_exits_before_shell() {
    let dir = setup_root(&["s1"]);
    write_file(dir.path(), "criteria.json", "[]x");

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\n")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_mark_feedback_extension_from_config() {
    let dir = setup_root(&["s1"]);
    write_file(
        dir.path(),
        "bertha.toml",
        "assignment = \"A1\"\nfeedback_extension = \"style\"\n",
    );

    bertha_in(&dir)
        .args(["mark", "--no-editor"])
        .write_stdin("next\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A1: 0/1 marked."));

    assert!(dir.path().join("s1").join("s1.style").exists());
}
