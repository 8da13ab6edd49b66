//! Recommendation - resolved guidance merged with checklist steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::decision_table;
use crate::domain::foundation::{DisciplineId, ScopeId};

/// A fully selected (scope, discipline) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionPair {
    pub scope: ScopeId,
    pub discipline: DisciplineId,
}

impl SelectionPair {
    pub fn new(scope: ScopeId, discipline: DisciplineId) -> Self {
        Self { scope, discipline }
    }
}

impl fmt::Display for SelectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.discipline)
    }
}

/// Guidance text for a pair together with its implementation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pair: SelectionPair,
    text: String,
    steps: Vec<String>,
}

impl Recommendation {
    /// Merges resolved text with the checklist looked up for the same pair.
    pub fn compose(pair: SelectionPair, text: impl Into<String>) -> Self {
        let steps = decision_table::lookup(&pair.discipline, pair.scope)
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            pair,
            text: text.into(),
            steps,
        }
    }

    pub fn pair(&self) -> &SelectionPair {
        &self.pair
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checklist steps in authored order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}
