//! Selection module - the two-step scope/discipline state machine.

mod errors;
mod machine;
mod phase;
mod recommendation;

pub use errors::SelectionError;
pub use machine::{ResolutionApplied, Selection};
pub use phase::{SelectionPhase, SelectionStatus};
pub use recommendation::{Recommendation, SelectionPair};
