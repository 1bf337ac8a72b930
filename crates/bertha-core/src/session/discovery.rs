//! Submission discovery
//!
//! A submission is an immediate subdirectory of the root whose name is a
//! student id: the letter `s` followed by one or more digits.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{BerthaError, Result};
use crate::trace_time;

/// Pattern a directory name must match to count as a submission
pub const SUBMISSION_ID_PATTERN: &str = r"^s[0-9]+$";

static SUBMISSION_ID: OnceLock<Option<Regex>> = OnceLock::new();

/// Whether `name` is a valid submission id
pub fn is_submission_id(name: &str) -> bool {
    let re = SUBMISSION_ID.get_or_init(|| match Regex::new(SUBMISSION_ID_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "Failed to compile submission id regex");
            None
        }
    });
    re.as_ref().is_some_and(|re| re.is_match(name))
}

/// List submission ids under `root`, sorted by name.
///
/// Only immediate subdirectories are considered. Files, nested directories
/// and directories with non-matching names are skipped. The order is stable
/// for an unchanged root.
pub fn discover_submissions(root: &Path) -> Result<Vec<String>> {
    let start = Instant::now();

    if !root.is_dir() {
        return Err(BerthaError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut ids = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_submission_id(name) {
            ids.push(name.to_string());
        } else {
            debug!(name, "ignoring non-submission directory");
        }
    }

    trace_time!(start, "discover_submissions", count = ids.len());
    Ok(ids)
}
