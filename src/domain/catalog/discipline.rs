//! Discipline - a security concern category chosen in the second step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DisciplineId;

/// One of the security disciplines a user explores for a chosen scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: DisciplineId,
    pub name: String,
    pub description: String,
}

impl Discipline {
    pub fn new(id: DisciplineId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The fixed set of discipline keys this build authors checklists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplineKey {
    Governance,
    Legal,
    Risk,
    Controls,
    Resilience,
}

impl DisciplineKey {
    /// All keys in catalog order.
    pub const ALL: [DisciplineKey; 5] = [
        DisciplineKey::Governance,
        DisciplineKey::Legal,
        DisciplineKey::Risk,
        DisciplineKey::Controls,
        DisciplineKey::Resilience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisciplineKey::Governance => "governance",
            DisciplineKey::Legal => "legal",
            DisciplineKey::Risk => "risk",
            DisciplineKey::Controls => "controls",
            DisciplineKey::Resilience => "resilience",
        }
    }

    /// Resolves an open discipline id to a known key, if it is one.
    pub fn from_id(id: &DisciplineId) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == id.as_str())
    }

    /// Returns the open identifier for this key.
    pub fn id(&self) -> DisciplineId {
        DisciplineId::from_static(self.as_str())
    }
}

impl fmt::Display for DisciplineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
