//! Rubric definition files
//!
//! A rubric is defined as a JSON array of sections:
//!
//! ```json
//! [
//!   {
//!     "name": "Style",
//!     "total_marks": 10,
//!     "criteria": [
//!       { "description": "Naming", "total_marks": 5 },
//!       { "description": "Comments", "total_marks": 5, "total_lives": 2 }
//!     ]
//!   }
//! ]
//! ```
//!
//! Decoding only checks shape. Value checks (negative totals, empty names)
//! happen in [`crate::rubric::Rubric::build`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BerthaError, Result};

/// One criterion as written in the definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionDef {
    pub description: String,
    pub total_marks: i64,
    /// Present only for forgiving criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lives: Option<i64>,
}

/// One section as written in the definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDef {
    pub name: String,
    pub total_marks: i64,
    pub criteria: Vec<CriterionDef>,
}

/// A decoded but not yet validated rubric
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RubricDefinition {
    pub sections: Vec<SectionDef>,
}

impl RubricDefinition {
    /// Decode a definition from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(BerthaError::definition)
    }

    /// Read and decode a definition file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BerthaError::definition(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            BerthaError::Definition { reason } => {
                BerthaError::definition(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }
}
