//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors, state machine trait)
//! - `catalog` - Scopes and disciplines offered for selection
//! - `decision_table` - Static checklist lookup with default fallback
//! - `selection` - Selection state machine and merged recommendations

pub mod catalog;
pub mod decision_table;
pub mod foundation;
pub mod selection;
