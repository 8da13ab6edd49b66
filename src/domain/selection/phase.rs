//! SelectionPhase and the presentation-facing SelectionStatus.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// No scope chosen.
    #[default]
    Idle,
    /// Scope chosen, no discipline.
    ScopeChosen,
    /// Scope and discipline chosen, no recommendation installed.
    DisciplinesPending,
    /// Recommendation installed for the live pair.
    Resolved,
}

impl StateMachine for SelectionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SelectionPhase::*;
        matches!(
            (self, target),
            // reset and choose_scope are valid from anywhere
            (_, Idle)
                | (_, ScopeChosen)
                | (ScopeChosen, DisciplinesPending)
                | (DisciplinesPending, DisciplinesPending)
                | (Resolved, DisciplinesPending)
                | (DisciplinesPending, Resolved)
                | (Resolved, Resolved)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SelectionPhase::*;
        match self {
            Idle => vec![Idle, ScopeChosen],
            ScopeChosen => vec![Idle, ScopeChosen, DisciplinesPending],
            DisciplinesPending => vec![Idle, ScopeChosen, DisciplinesPending, Resolved],
            Resolved => vec![Idle, ScopeChosen, DisciplinesPending, Resolved],
        }
    }
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionPhase::Idle => "Idle",
            SelectionPhase::ScopeChosen => "ScopeChosen",
            SelectionPhase::DisciplinesPending => "DisciplinesPending",
            SelectionPhase::Resolved => "Resolved",
        };
        write!(f, "{}", s)
    }
}

/// What a presentation surface should show for the current selection.
///
/// Splits `DisciplinesPending` into "still resolving" and "resolution failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    AwaitingScope,
    AwaitingDiscipline,
    Resolving,
    Unavailable,
    Ready,
}
