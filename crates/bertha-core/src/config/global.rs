//! Global configuration for bertha (stored in ~/.config/bertha/config.toml)
//!
//! Holds per-grader preferences that apply to every marking run, currently
//! just the editor command.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BerthaError, Result};

const CONFIG_DIR: &str = "bertha";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "BERTHA_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<Vec<String>>,
}

impl GlobalConfig {
    fn config_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the global config. A missing file (or no config directory at
    /// all) yields the default.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load and validate the global config at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let invalid = |reason: String| BerthaError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let config: GlobalConfig = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        if config.editor.as_ref().is_some_and(|cmd| cmd.is_empty()) {
            return Err(invalid("editor must name a program".to_string()));
        }
        Ok(config)
    }
}
