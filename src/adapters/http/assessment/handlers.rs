//! HTTP handlers for the assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::reference::ReferenceCatalog;
use crate::domain::foundation::{DisciplineId, DomainError, ErrorCode, ScopeId};

use super::dto::{ErrorResponse, RecommendationResponse, WelcomeResponse};

/// GET / - API greeting
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

/// GET /scopes - List every scope
pub async fn list_scopes(State(catalog): State<Arc<ReferenceCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.scopes().to_vec())).into_response()
}

/// GET /scopes/:id - Get one scope
pub async fn get_scope(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Path(scope_id): Path<String>,
) -> Response {
    let result = parse_scope_id(&scope_id).and_then(|id| catalog.scope(id).cloned());
    match result {
        Ok(scope) => (StatusCode::OK, Json(scope)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /disciplines - List every discipline with its considerations
pub async fn list_disciplines(State(catalog): State<Arc<ReferenceCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.disciplines().to_vec())).into_response()
}

/// GET /disciplines/:id - Get one discipline
pub async fn get_discipline(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Path(discipline_id): Path<String>,
) -> Response {
    let result = parse_discipline_id(&discipline_id)
        .and_then(|id| catalog.discipline(&id).cloned());
    match result {
        Ok(discipline) => (StatusCode::OK, Json(discipline)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /recommendations/:scope_id/:discipline_id - Guidance for a pair
pub async fn get_recommendation(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Path((scope_id, discipline_id)): Path<(String, String)>,
) -> Response {
    let scope_id = match parse_scope_id(&scope_id) {
        Ok(id) => id,
        Err(e) => return handle_domain_error(e),
    };
    let discipline_id = match parse_discipline_id(&discipline_id) {
        Ok(id) => id,
        Err(e) => return handle_domain_error(e),
    };

    match catalog.guidance(scope_id, &discipline_id) {
        Ok(guidance) => {
            let response = RecommendationResponse::from(guidance);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

// integers outside the id space name no scope; anything else is malformed
fn parse_scope_id(raw: &str) -> Result<ScopeId, DomainError> {
    raw.parse::<ScopeId>().map_err(|e| {
        let error = if is_integer(raw) {
            DomainError::new(ErrorCode::ScopeNotFound, "Scope not found")
        } else {
            DomainError::from(e)
        };
        error.with_detail("scope_id", raw)
    })
}

fn is_integer(raw: &str) -> bool {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// an id that fails validation cannot name a known discipline
fn parse_discipline_id(raw: &str) -> Result<DisciplineId, DomainError> {
    raw.parse::<DisciplineId>().map_err(|_| {
        DomainError::new(ErrorCode::DisciplineNotFound, "Discipline not found")
            .with_detail("discipline_id", raw)
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ScopeNotFound | ErrorCode::DisciplineNotFound => StatusCode::NOT_FOUND,
        ErrorCode::EmptyField | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!(%error, "unexpected error serving request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response();
        }
    };
    (status, Json(ErrorResponse::from(error))).into_response()
}
