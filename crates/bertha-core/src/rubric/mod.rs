//! Rubric model: sections of criteria with deduction state
//!
//! A rubric is built once per marking run from a [`RubricDefinition`] and is
//! structurally fixed afterwards. Only criterion values change, through
//! [`Rubric::apply_deduction`] and the reset operations.

pub mod criterion;
pub mod definition;
pub mod section;
mod summary;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::bail_definition;
use crate::error::{BerthaError, Result};
pub use criterion::{Criterion, CriterionKind};
pub use definition::{CriterionDef, RubricDefinition, SectionDef};
pub use section::{Score, Section};
pub use summary::{format_breakdown, format_summary};

/// Position of a criterion within a rubric (zero-based).
///
/// Parses from and displays as the one-based `S.C` form used in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionRef {
    pub section: usize,
    pub criterion: usize,
}

impl CriterionRef {
    pub fn new(section: usize, criterion: usize) -> Self {
        Self { section, criterion }
    }
}

impl FromStr for CriterionRef {
    type Err = BerthaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            BerthaError::UsageError(format!(
                "invalid criterion reference '{}' (expected SECTION.CRITERION, e.g. 2.1)",
                s
            ))
        };
        let (section, criterion) = s.trim().split_once('.').ok_or_else(invalid)?;
        let section: usize = section.parse().map_err(|_| invalid())?;
        let criterion: usize = criterion.parse().map_err(|_| invalid())?;
        if section == 0 || criterion == 0 {
            return Err(invalid());
        }
        Ok(Self::new(section - 1, criterion - 1))
    }
}

impl fmt::Display for CriterionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section + 1, self.criterion + 1)
    }
}

/// An ordered sequence of sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rubric {
    sections: Vec<Section>,
}

impl Rubric {
    /// Build a rubric from a decoded definition, rejecting negative totals,
    /// negative lives and empty names.
    pub fn build(definition: &RubricDefinition) -> Result<Self> {
        let mut sections = Vec::with_capacity(definition.sections.len());

        for (s_idx, section_def) in definition.sections.iter().enumerate() {
            let name = section_def.name.trim();
            if name.is_empty() {
                bail_definition!("section {} has an empty name", s_idx + 1);
            }
            let total = non_negative(section_def.total_marks, || {
                format!("section '{}' total_marks", name)
            })?;

            let mut section = Section::new(name, total);
            for (c_idx, criterion_def) in section_def.criteria.iter().enumerate() {
                let criterion = build_criterion(name, c_idx, criterion_def)?;
                if !section.add_criterion(criterion) {
                    warn!(
                        section = name,
                        criterion = %criterion_def.description,
                        "duplicate criterion ignored"
                    );
                }
            }
            sections.push(section);
        }

        debug!(sections = sections.len(), "rubric_built");
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn criterion(&self, at: CriterionRef) -> Option<&Criterion> {
        self.sections
            .get(at.section)
            .and_then(|s| s.criteria().get(at.criterion))
    }

    fn criterion_mut(&mut self, at: CriterionRef) -> Result<&mut Criterion> {
        self.sections
            .get_mut(at.section)
            .and_then(|s| s.criterion_mut(at.criterion))
            .ok_or_else(|| BerthaError::UnknownCriterion {
                reference: at.to_string(),
            })
    }

    /// Apply one deduction to the criterion at `at`.
    ///
    /// The deduction itself never fails; the only error is a reference that
    /// does not name a criterion.
    pub fn apply_deduction(&mut self, at: CriterionRef) -> Result<&Criterion> {
        let criterion = self.criterion_mut(at)?;
        criterion.apply_deduction();
        debug!(
            criterion = %at,
            current = criterion.current_value(),
            lives = ?criterion.remaining_lives(),
            "deduction"
        );
        Ok(criterion)
    }

    /// Restore one criterion to full marks
    pub fn reset_criterion(&mut self, at: CriterionRef) -> Result<&Criterion> {
        let criterion = self.criterion_mut(at)?;
        criterion.reset();
        Ok(criterion)
    }

    /// Restore one section to full marks
    pub fn reset_section(&mut self, index: usize) -> Result<&Section> {
        let section = self
            .sections
            .get_mut(index)
            .ok_or_else(|| BerthaError::UnknownCriterion {
                reference: format!("{}", index + 1),
            })?;
        section.reset();
        Ok(section)
    }

    /// Restore every criterion to full marks
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }

    /// Score for the section at `index`
    pub fn section_score(&self, index: usize) -> Option<Score> {
        self.sections.get(index).map(Section::score)
    }

    /// Total across all sections, each clamped to its own cap
    pub fn score(&self) -> Score {
        self.sections.iter().map(Section::score).fold(
            Score { current: 0, max: 0 },
            |acc, s| Score {
                current: acc.current.saturating_add(s.current),
                max: acc.max.saturating_add(s.max),
            },
        )
    }
}

fn non_negative(value: i64, what: impl FnOnce() -> String) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        BerthaError::definition(format!(
            "{} must be between 0 and {}, got {}",
            what(),
            u32::MAX,
            value
        ))
    })
}

fn build_criterion(section: &str, index: usize, def: &CriterionDef) -> Result<Criterion> {
    let description = def.description.trim();
    if description.is_empty() {
        bail_definition!(
            "criterion {} in section '{}' has an empty description",
            index + 1,
            section
        );
    }
    let total = non_negative(def.total_marks, || {
        format!("criterion '{}' total_marks", description)
    })?;

    match def.total_lives {
        None => Ok(Criterion::plain(description, total)),
        Some(lives) => {
            let lives = non_negative(lives, || {
                format!("criterion '{}' total_lives", description)
            })?;
            Ok(Criterion::forgiving(description, total, lives))
        }
    }
}
