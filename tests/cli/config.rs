use crate::support::{bertha, bertha_in, setup_root, write_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config discovery tests
// ============================================================================

#[test]
fn test_config_in_root_is_used() {
    let dir = setup_root(&["s1"]);
    fs::create_dir(dir.path().join("marking")).unwrap();
    fs::rename(
        dir.path().join("criteria.json"),
        dir.path().join("marking").join("a1.json"),
    )
    .unwrap();
    write_file(
        dir.path(),
        "bertha.toml",
        "assignment = \"Assignment 1\"\nrubric = \"marking/a1.json\"\n",
    );

    bertha_in(&dir)
        .arg("rubric")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 15/15"));

    bertha_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Assignment 1\n"));
}

#[test]
fn test_explicit_config_resolves_relative_to_itself() {
    let dir = setup_root(&["s1"]);
    let conf = tempdir().unwrap();
    fs::copy(
        dir.path().join("criteria.json"),
        conf.path().join("rubric.json"),
    )
    .unwrap();
    let config_path = conf.path().join("marking.toml");
    fs::write(&config_path, "rubric = \"rubric.json\"\nstate_file = \"done.json\"\n").unwrap();

    bertha_in(&dir)
        .arg("--config")
        .arg(&config_path)
        .args(["mark", "--no-editor"])
        .write_stdin("next\nskip\n")
        .assert()
        .success();

    assert!(conf.path().join("done.json").exists());
    assert!(!dir.path().join("bertha-state.json").exists());
}

#[test]
fn test_unknown_config_key_is_data_error() {
    let dir = setup_root(&["s1"]);
    write_file(dir.path(), "bertha.toml", "rubrik = \"x.json\"\n");

    bertha_in(&dir)
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_bad_feedback_extension_is_data_error() {
    let dir = setup_root(&["s1"]);
    write_file(dir.path(), "bertha.toml", "feedback_extension = \".txt\"\n");

    bertha_in(&dir)
        .args(["--format", "json", "status"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_config\""));
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = setup_root(&["s1"]);

    bertha()
        .arg("--root")
        .arg(dir.path())
        .args(["--config", "/nonexistent/bertha.toml", "status"])
        .assert()
        .code(3);
}

#[test]
fn test_broken_global_config_stops_mark() {
    let dir = setup_root(&["s1"]);
    let global = tempdir().unwrap();
    fs::write(global.path().join("config.toml"), "editor = 12\n").unwrap();

    bertha_in(&dir)
        .env("BERTHA_CONFIG_DIR", global.path())
        .arg("mark")
        .write_stdin("quit\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_empty_global_editor_is_data_error() {
    let dir = setup_root(&["s1"]);
    let global = tempdir().unwrap();
    fs::write(global.path().join("config.toml"), "editor = []\n").unwrap();

    bertha_in(&dir)
        .env("BERTHA_CONFIG_DIR", global.path())
        .arg("mark")
        .write_stdin("quit\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("editor must name a program"));
}
