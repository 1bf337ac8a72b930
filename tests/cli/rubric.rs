use crate::support::{bertha_in, setup_root, write_file};
use predicates::prelude::*;

// ============================================================================
// Rubric command tests
// ============================================================================

#[test]
fn test_rubric_breakdown() {
    let dir = setup_root(&[]);

    bertha_in(&dir)
        .arg("rubric")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Section: Style, (10 / 10)"))
        .stdout(predicate::str::contains("1.2 Comments -(0 / 5) lives=1"))
        .stdout(predicate::str::contains("Total: 15/15"));
}

#[test]
fn test_rubric_json() {
    let dir = setup_root(&[]);

    let output = bertha_in(&dir)
        .args(["--format", "json", "rubric"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sections"].as_array().unwrap().len(), 2);
    assert_eq!(json["total"]["max"], 15);
    assert!(json["path"].as_str().unwrap().ends_with("criteria.json"));
}

#[test]
fn test_rubric_override_path() {
    let dir = setup_root(&[]);
    write_file(
        dir.path(),
        "short.json",
        r#"[{"name": "Only", "total_marks": 3, "criteria": []}]"#,
    );

    bertha_in(&dir)
        .args(["--rubric", "short.json", "rubric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Section: Only, (3 / 3)"))
        .stdout(predicate::str::contains("Total: 3/3"));
}

#[test]
fn test_rubric_missing_field_is_data_error() {
    let dir = setup_root(&[]);
    write_file(
        dir.path(),
        "criteria.json",
        r#"[{"name": "Style", "criteria": []}]"#,
    );

    bertha_in(&dir)
        .arg("rubric")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid rubric definition"));
}

#[test]
fn test_rubric_negative_total_is_data_error() {
    let dir = setup_root(&[]);
    write_file(
        dir.path(),
        "criteria.json",
        r#"[{"name": "Style", "total_marks": -1, "criteria": []}]"#,
    );

    bertha_in(&dir)
        .args(["--format", "json", "rubric"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"definition_error\""));
}

#[test]
fn test_rubric_missing_file_is_data_error() {
    let dir = setup_root(&[]);

    bertha_in(&dir)
        .args(["--rubric", "absent.json", "rubric"])
        .assert()
        .code(3);
}
