//! Marking session: stepping through submissions and recording which are done
//!
//! The session knows the submissions discovered under a root directory (in a
//! fixed discovery order), the set already marked, and which one is current.
//! Only the marked set is persisted; the current selection is recomputed as
//! "first unmarked submission" every time the session advances.
//!
//! Mutations happen in memory first and are then persisted. A failed write is
//! reported as [`BerthaError::Persistence`] and the in-memory change stays, so
//! a crash between the two can lose one marking event.

pub mod discovery;
pub mod store;
pub mod viewer;

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{BerthaError, Result};
pub use discovery::{discover_submissions, is_submission_id, SUBMISSION_ID_PATTERN};
pub use store::MarkedStore;
pub use viewer::{EditorViewer, NoViewer, SubmissionViewer};

/// Default extension of the feedback file written on commit
pub const DEFAULT_FEEDBACK_EXTENSION: &str = "feedback";

/// Where the session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<'a> {
    NoCurrentSelection,
    HasCurrentSelection(&'a str),
    /// Every discovered submission is marked
    AllMarked,
}

/// Result of asking the session to move on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The given submission is now current
    Selected(String),
    /// Nothing left to mark; the session did not change
    AlreadyComplete,
}

/// One-based position of the current submission in discovery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub index: Option<usize>,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}/{}", index, self.total),
            None => write!(f, "-/{}", self.total),
        }
    }
}

/// How many submissions are marked out of all discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub marked: usize,
    pub total: usize,
}

/// A marking run over one submission root
pub struct MarkingSession {
    root: PathBuf,
    submissions: Vec<String>,
    marked: BTreeSet<String>,
    /// Ids in the state file that were not discovered under the root. Written
    /// back untouched, never counted as marked.
    retained: BTreeSet<String>,
    current: Option<String>,
    store: MarkedStore,
    viewer: Box<dyn SubmissionViewer>,
    feedback_extension: String,
}

impl MarkingSession {
    /// Discover submissions under `root` and load the marked set from
    /// `state_path`.
    ///
    /// Fails if the root is not a directory or the state file exists but
    /// cannot be decoded. The session starts with no current selection and no
    /// viewer; see [`MarkingSession::with_viewer`].
    #[tracing::instrument(skip_all, fields(root = %root.display()))]
    pub fn initialize(root: &Path, state_path: &Path) -> Result<Self> {
        let submissions = discover_submissions(root)?;
        let store = MarkedStore::new(state_path);
        let stored = store.load()?;

        let (marked, retained): (BTreeSet<String>, BTreeSet<String>) = stored
            .into_iter()
            .partition(|id| submissions.contains(id));

        if !retained.is_empty() {
            debug!(
                count = retained.len(),
                "state lists submissions not found under root"
            );
        }
        debug!(
            submissions = submissions.len(),
            marked = marked.len(),
            "session_initialized"
        );

        Ok(Self {
            root: std::path::absolute(root)?,
            submissions,
            marked,
            retained,
            current: None,
            store,
            viewer: Box::new(NoViewer),
            feedback_extension: DEFAULT_FEEDBACK_EXTENSION.to_string(),
        })
    }

    /// Use `viewer` to open submissions
    pub fn with_viewer(mut self, viewer: impl SubmissionViewer + 'static) -> Self {
        self.viewer = Box::new(viewer);
        self
    }

    /// Write feedback files as `<id>.<extension>`
    pub fn with_feedback_extension(mut self, extension: impl Into<String>) -> Self {
        self.feedback_extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Submission ids in discovery order
    pub fn submissions(&self) -> &[String] {
        &self.submissions
    }

    pub fn marked(&self) -> &BTreeSet<String> {
        &self.marked
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn state(&self) -> SessionState<'_> {
        if self.is_complete() {
            SessionState::AllMarked
        } else {
            match &self.current {
                Some(id) => SessionState::HasCurrentSelection(id),
                None => SessionState::NoCurrentSelection,
            }
        }
    }

    /// Whether every discovered submission is marked
    pub fn is_complete(&self) -> bool {
        self.submissions.iter().all(|id| self.marked.contains(id))
    }

    /// The submission [`MarkingSession::advance`] would select next
    pub fn next_unmarked(&self) -> Option<&str> {
        self.submissions
            .iter()
            .find(|id| !self.marked.contains(*id))
            .map(String::as_str)
    }

    /// Select the first unmarked submission in discovery order and open it.
    ///
    /// When everything is marked this only logs a warning and returns
    /// [`AdvanceOutcome::AlreadyComplete`]. A viewer that fails to launch is
    /// logged; the selection still moves.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let Some(next) = self.next_unmarked().map(str::to_string) else {
            warn!("all submissions are marked");
            return AdvanceOutcome::AlreadyComplete;
        };

        debug!(from = ?self.current, to = %next, "advance");
        self.current = Some(next.clone());

        let folder = self.submission_folder(&next);
        if let Err(e) = self.viewer.open_for_viewing(&folder) {
            warn!(error = %e, folder = %folder.display(), "could not open submission");
        }

        AdvanceOutcome::Selected(next)
    }

    /// Mark the current submission without writing feedback, persist, then
    /// advance. Used to defer a submission.
    pub fn skip_current(&mut self) -> Result<AdvanceOutcome> {
        let id = self.current.clone().ok_or(BerthaError::NoSelection)?;

        self.marked.insert(id.clone());
        info!(submission = %id, "skipped");
        self.persist()?;

        Ok(self.advance())
    }

    /// Mark the current submission, persist, and write `summary` as its
    /// feedback file. Returns the feedback file path. Does not advance.
    pub fn commit_current(&mut self, summary: &str) -> Result<PathBuf> {
        let id = self.current.clone().ok_or(BerthaError::NoSelection)?;

        self.marked.insert(id.clone());
        self.persist()?;

        let path = self.feedback_path(&id);
        fs::write(&path, summary).map_err(|e| BerthaError::persistence(&path, e))?;

        info!(submission = %id, path = %path.display(), "committed");
        Ok(path)
    }

    /// Open the current submission again
    pub fn view_current(&self) -> Result<()> {
        let id = self.current.as_deref().ok_or(BerthaError::NoSelection)?;
        self.viewer.open_for_viewing(&self.submission_folder(id))
    }

    pub fn position(&self) -> Position {
        let index = self
            .current
            .as_ref()
            .and_then(|current| self.submissions.iter().position(|id| id == current))
            .map(|i| i + 1);
        Position {
            index,
            total: self.submissions.len(),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            marked: self.marked.len(),
            total: self.submissions.len(),
        }
    }

    pub fn is_current_marked(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|id| self.marked.contains(id))
    }

    /// Folder of submission `id` under the root
    pub fn submission_folder(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// Feedback file for submission `id`: `<root>/<id>/<id>.<extension>`
    pub fn feedback_path(&self, id: &str) -> PathBuf {
        self.submission_folder(id)
            .join(format!("{}.{}", id, self.feedback_extension))
    }

    fn persist(&self) -> Result<()> {
        let all: BTreeSet<String> = self.marked.union(&self.retained).cloned().collect();
        self.store.save(&all)
    }
}
