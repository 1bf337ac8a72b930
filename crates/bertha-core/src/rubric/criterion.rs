//! Marking criteria and their deduction rules

use std::fmt;

use serde::Serialize;

/// How a criterion responds to a deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CriterionKind {
    /// Every deduction costs a mark
    Plain,
    /// The first `total_lives` deductions are free warnings
    Forgiving {
        total_lives: u32,
        remaining_lives: u32,
    },
}

/// The smallest rubric unit, tracking its own deduction state.
///
/// Invariant: `current_value <= total_value`. Values are unsigned, so the
/// lower bound of zero holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    description: String,
    total_value: u32,
    current_value: u32,
    #[serde(flatten)]
    kind: CriterionKind,
}

impl Criterion {
    /// Create a criterion where every deduction costs a mark
    pub fn plain(description: impl Into<String>, total_value: u32) -> Self {
        Self {
            description: description.into(),
            total_value,
            current_value: total_value,
            kind: CriterionKind::Plain,
        }
    }

    /// Create a criterion that forgives its first `total_lives` deductions
    pub fn forgiving(description: impl Into<String>, total_value: u32, total_lives: u32) -> Self {
        Self {
            description: description.into(),
            total_value,
            current_value: total_value,
            kind: CriterionKind::Forgiving {
                total_lives,
                remaining_lives: total_lives,
            },
        }
    }

    /// Record one infraction against this criterion. Never fails; marks
    /// bottom out at zero.
    pub fn apply_deduction(&mut self) {
        if let CriterionKind::Forgiving {
            remaining_lives, ..
        } = &mut self.kind
        {
            if *remaining_lives > 0 {
                *remaining_lives -= 1;
                return;
            }
        }
        self.current_value = self.current_value.saturating_sub(1);
    }

    /// Restore full marks (and full lives)
    pub fn reset(&mut self) {
        self.current_value = self.total_value;
        if let CriterionKind::Forgiving {
            total_lives,
            remaining_lives,
        } = &mut self.kind
        {
            *remaining_lives = *total_lives;
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> CriterionKind {
        self.kind
    }

    pub fn total_value(&self) -> u32 {
        self.total_value
    }

    pub fn current_value(&self) -> u32 {
        self.current_value
    }

    /// Marks lost so far
    pub fn deductions(&self) -> u32 {
        self.total_value - self.current_value
    }

    pub fn is_forgiving(&self) -> bool {
        matches!(self.kind, CriterionKind::Forgiving { .. })
    }

    /// Lives left before deductions start costing marks, if forgiving
    pub fn remaining_lives(&self) -> Option<u32> {
        match self.kind {
            CriterionKind::Plain => None,
            CriterionKind::Forgiving {
                remaining_lives, ..
            } => Some(remaining_lives),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-({} / {})", self.deductions(), self.total_value)
    }
}
