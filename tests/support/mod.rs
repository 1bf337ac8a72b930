use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Rubric used by most CLI tests: 15 marks over two sections
pub const RUBRIC_JSON: &str = r#"[
  {
    "name": "Style",
    "total_marks": 10,
    "criteria": [
      { "description": "Naming", "total_marks": 5 },
      { "description": "Comments", "total_marks": 5, "total_lives": 1 }
    ]
  },
  {
    "name": "Correctness",
    "total_marks": 5,
    "criteria": [
      { "description": "Output", "total_marks": 5 }
    ]
  }
]"#;

/// Get a Command for bertha, isolated from the caller's editor and global config
pub fn bertha() -> Command {
    let mut cmd = cargo_bin_cmd!("bertha");
    cmd.env_remove("BERTHA_ROOT")
        .env_remove("BERTHA_LOG")
        .env_remove("RUST_LOG")
        .env_remove("VISUAL")
        .env_remove("EDITOR")
        .env("BERTHA_CONFIG_DIR", std::env::temp_dir().join("bertha-tests-no-config"));
    cmd
}

/// Bertha command rooted at `dir`
#[allow(dead_code)]
pub fn bertha_in(dir: &TempDir) -> Command {
    let mut cmd = bertha();
    cmd.current_dir(dir.path()).arg("--root").arg(dir.path());
    cmd
}

/// Submission root with the default rubric and one folder per name
#[allow(dead_code)]
pub fn setup_root(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("criteria.json"), RUBRIC_JSON).unwrap();
    for name in names {
        fs::create_dir(dir.path().join(name)).unwrap();
    }
    dir
}

/// Write `content` to `name` under `dir`
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Run bertha in `dir` and return stdout as String
#[allow(dead_code)]
pub fn run_and_get_stdout(dir: &TempDir, args: &[&str]) -> String {
    let output = bertha_in(dir).args(args).output().unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}
