//! Rubric sections

use std::fmt;

use serde::Serialize;

use super::criterion::Criterion;

/// A score out of a maximum. Wide enough to total any number of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub current: u64,
    pub max: u64,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// A named, capped group of criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    total_value: u32,
    criteria: Vec<Criterion>,
}

impl Section {
    pub fn new(name: impl Into<String>, total_value: u32) -> Self {
        Self {
            name: name.into(),
            total_value,
            criteria: Vec::new(),
        }
    }

    /// Add a criterion. A criterion whose description is already present is
    /// ignored; returns whether it was added.
    pub fn add_criterion(&mut self, criterion: Criterion) -> bool {
        if self
            .criteria
            .iter()
            .any(|c| c.description() == criterion.description())
        {
            return false;
        }
        self.criteria.push(criterion);
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criterion_mut(&mut self, index: usize) -> Option<&mut Criterion> {
        self.criteria.get_mut(index)
    }

    /// Marks lost across every criterion in the section
    pub fn total_deductions(&self) -> u64 {
        self.criteria.iter().map(|c| u64::from(c.deductions())).sum()
    }

    /// Section score, clamped to `[0, total_value]` whatever the criterion
    /// totals add up to.
    pub fn score(&self) -> Score {
        let max = u64::from(self.total_value);
        Score {
            current: max.saturating_sub(self.total_deductions()),
            max,
        }
    }

    /// Restore every criterion to full marks
    pub fn reset(&mut self) {
        for criterion in &mut self.criteria {
            criterion.reset();
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score();
        write!(f, "Section: {}, ({} / {})", self.name, score.current, score.max)
    }
}
