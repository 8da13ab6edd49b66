//! Catalog module - the scopes and disciplines a user chooses between.
//!
//! The catalog is supplied by an external source at startup and is
//! immutable once loaded. A failed load yields an empty catalog.

mod discipline;
mod scope;

pub use discipline::{Discipline, DisciplineKey};
pub use scope::Scope;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DisciplineId, ScopeId};

/// The loaded set of scopes and disciplines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    scopes: Vec<Scope>,
    disciplines: Vec<Discipline>,
}

impl Catalog {
    pub fn new(scopes: Vec<Scope>, disciplines: Vec<Discipline>) -> Self {
        Self {
            scopes,
            disciplines,
        }
    }

    /// A catalog with nothing to offer.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    /// True when no scope can be selected.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.id == id)
    }

    pub fn discipline(&self, id: &DisciplineId) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| &d.id == id)
    }
}
