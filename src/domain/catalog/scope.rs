//! Scope - an AI implementation category chosen in the first step.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScopeId;

/// One of the generative AI implementation scopes a user selects first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub id: ScopeId,
    pub name: String,
    pub description: String,
    /// Illustrative example of a business operating in this scope.
    pub example: String,
}

impl Scope {
    pub fn new(
        id: impl Into<ScopeId>,
        name: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            example: example.into(),
        }
    }
}
