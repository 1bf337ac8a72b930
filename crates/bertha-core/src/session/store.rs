//! Persisted marking state
//!
//! The marked set is stored as JSON:
//!
//! ```json
//! { "version": 1, "marked": ["s1001", "s1002"], "updated": "2026-10-16T09:30:00Z" }
//! ```
//!
//! A bare array of ids is accepted on load as well. A missing file means
//! nothing has been marked yet; a file that exists but does not decode is a
//! [`BerthaError::CorruptState`].

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BerthaError, Result};

/// Current state file format version
pub const STATE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    version: u32,
    marked: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredState {
    Versioned(StateFile),
    Bare(BTreeSet<String>),
}

/// File holding the set of marked submission ids
#[derive(Debug, Clone)]
pub struct MarkedStore {
    path: PathBuf,
}

impl MarkedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the marked set. A missing file is an empty set.
    pub fn load(&self) -> Result<BTreeSet<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no marking state yet");
                return Ok(BTreeSet::new());
            }
            Err(e) => return Err(BerthaError::corrupt_state(&self.path, e)),
        };

        let stored: StoredState = serde_json::from_str(&content)
            .map_err(|e| BerthaError::corrupt_state(&self.path, e))?;

        match stored {
            StoredState::Versioned(file) if file.version > STATE_FORMAT_VERSION => {
                Err(BerthaError::corrupt_state(
                    &self.path,
                    format!(
                        "state format version {} is newer than supported version {}",
                        file.version, STATE_FORMAT_VERSION
                    ),
                ))
            }
            StoredState::Versioned(file) => Ok(file.marked),
            StoredState::Bare(marked) => Ok(marked),
        }
    }

    /// Overwrite the state file with `marked`
    pub fn save(&self, marked: &BTreeSet<String>) -> Result<()> {
        let file = StateFile {
            version: STATE_FORMAT_VERSION,
            marked: marked.clone(),
            updated: Some(Utc::now()),
        };
        let content = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BerthaError::persistence(&self.path, e))?;
        }
        fs::write(&self.path, content).map_err(|e| BerthaError::persistence(&self.path, e))?;

        debug!(path = %self.path.display(), marked = marked.len(), "state_saved");
        Ok(())
    }
}
