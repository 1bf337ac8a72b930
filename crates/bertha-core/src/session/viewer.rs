//! Opening a submission folder for the grader
//!
//! The session only asks for a folder to be opened. How that happens is up to
//! the [`SubmissionViewer`] it was given.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{BerthaError, Result};

/// Something that can show a submission folder to the grader
pub trait SubmissionViewer {
    /// Open `folder` for viewing. Implementations must not block on the
    /// viewer exiting.
    fn open_for_viewing(&self, folder: &Path) -> Result<()>;
}

/// Launches an editor process on the folder and leaves it running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorViewer {
    program: String,
    args: Vec<String>,
}

impl EditorViewer {
    /// Build a viewer from a command line split into words, e.g.
    /// `["code", "--new-window"]`. The folder is appended as the last argument.
    pub fn from_command(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| BerthaError::UsageError("editor command is empty".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl SubmissionViewer for EditorViewer {
    fn open_for_viewing(&self, folder: &Path) -> Result<()> {
        debug!(editor = %self.program, folder = %folder.display(), "open_editor");
        // The child is dropped without waiting, so it outlives this call
        Command::new(&self.program)
            .args(&self.args)
            .arg(folder)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                BerthaError::Other(format!("failed to open editor '{}': {}", self.program, e))
            })?;
        Ok(())
    }
}

/// Viewer used when no editor is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoViewer;

impl SubmissionViewer for NoViewer {
    fn open_for_viewing(&self, folder: &Path) -> Result<()> {
        Err(BerthaError::UsageError(format!(
            "no editor configured to open {}. Set `editor` in bertha.toml, EDITOR/VISUAL, or use --editor",
            folder.display()
        )))
    }
}
