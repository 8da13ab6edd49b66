//! HTTP DTOs for the assessment endpoints.

use serde::Serialize;
use std::collections::HashMap;

use crate::adapters::reference::{DisciplineEntry, ReferenceGuidance};
use crate::domain::catalog::Scope;
use crate::domain::foundation::DomainError;

/// Response for the API root.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the AI Risk Assessment API".to_string(),
        }
    }
}

/// Guidance for one scope and discipline.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub scope: Scope,
    pub discipline: DisciplineEntry,
    pub recommendation: String,
}

impl From<ReferenceGuidance<'_>> for RecommendationResponse {
    fn from(guidance: ReferenceGuidance<'_>) -> Self {
        Self {
            scope: guidance.scope.clone(),
            discipline: guidance.discipline.clone(),
            recommendation: guidance.text.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message,
            details: error.details,
        }
    }
}
