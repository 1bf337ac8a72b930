//! Marking configuration for bertha
//!
//! A marking run is configured by `bertha.toml`, read from `--config` or from
//! the submission root. Every field has a default, so the file is optional:
//!
//! ```toml
//! assignment = "2002 Assignment Marking"
//! rubric = "a1_criteria.json"
//! state_file = "a1_state.json"
//! feedback_extension = "style"
//! editor = ["code", "--new-window"]
//! ```
//!
//! Relative paths resolve against the directory holding the config file, or
//! against the submission root when there is no file.

pub mod global;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BerthaError, Result};
use crate::session::DEFAULT_FEEDBACK_EXTENSION;
pub use global::GlobalConfig;

/// Config file name looked up in the submission root
pub const CONFIG_FILE: &str = "bertha.toml";

/// Configuration for one marking run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkingConfig {
    /// Display name for the marking run
    #[serde(default = "default_assignment")]
    pub assignment: String,

    /// Rubric definition file (JSON)
    #[serde(default = "default_rubric")]
    pub rubric: PathBuf,

    /// File recording which submissions are marked
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Extension of the feedback file written into each submission folder
    #[serde(default = "default_feedback_extension")]
    pub feedback_extension: String,

    /// Editor command used to open submissions, folder appended last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<Vec<String>>,
}

fn default_assignment() -> String {
    "Assignment Marking".to_string()
}

fn default_rubric() -> PathBuf {
    PathBuf::from("criteria.json")
}

fn default_state_file() -> PathBuf {
    PathBuf::from("bertha-state.json")
}

fn default_feedback_extension() -> String {
    DEFAULT_FEEDBACK_EXTENSION.to_string()
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            assignment: default_assignment(),
            rubric: default_rubric(),
            state_file: default_state_file(),
            feedback_extension: default_feedback_extension(),
            editor: None,
        }
    }
}

impl MarkingConfig {
    /// Load configuration from a file, resolving relative paths against the
    /// file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let invalid = |reason: String| BerthaError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let config: MarkingConfig = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        config.validate().map_err(invalid)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(config.resolved_against(base))
    }

    /// Find the configuration for a marking run.
    ///
    /// An explicit path must exist. Otherwise `<root>/bertha.toml` is used if
    /// present, falling back to defaults resolved against `root`.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = root.join(CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "using config");
            Self::load(&candidate)
        } else {
            debug!(root = %root.display(), "no config file, using defaults");
            Ok(Self::default().resolved_against(root))
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let ext = self.feedback_extension.as_str();
        if ext.is_empty() || ext.contains(['/', '\\']) || ext.starts_with('.') {
            return Err(format!(
                "feedback_extension must be a bare extension like \"feedback\", got {:?}",
                ext
            ));
        }
        if self.editor.as_ref().is_some_and(|cmd| cmd.is_empty()) {
            return Err("editor must name a program".to_string());
        }
        Ok(())
    }

    fn resolved_against(mut self, base: &Path) -> Self {
        if self.rubric.is_relative() {
            self.rubric = base.join(&self.rubric);
        }
        if self.state_file.is_relative() {
            self.state_file = base.join(&self.state_file);
        }
        self
    }
}

/// Split a shell-style command line such as `code --wait` into words
pub fn split_command(command: &str) -> Result<Vec<String>> {
    match shlex::split(command) {
        Some(words) if !words.is_empty() => Ok(words),
        _ => Err(BerthaError::UsageError(format!(
            "invalid editor command: {:?}",
            command
        ))),
    }
}

/// Pick the editor command: explicit override, then the marking config, then
/// the global config, then `$VISUAL` / `$EDITOR`.
pub fn resolve_editor(
    explicit: Option<&str>,
    config: &MarkingConfig,
    global: &GlobalConfig,
) -> Result<Option<Vec<String>>> {
    if let Some(command) = explicit {
        return split_command(command).map(Some);
    }
    if let Some(command) = config.editor.clone().or_else(|| global.editor.clone()) {
        return Ok(Some(command));
    }
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                return split_command(&value).map(Some);
            }
        }
    }
    Ok(None)
}
