//! HTTP routes for the assessment endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::adapters::reference::ReferenceCatalog;

use super::handlers::{
    get_discipline, get_recommendation, get_scope, list_disciplines, list_scopes, welcome,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(catalog: Arc<ReferenceCatalog>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/scopes", get(list_scopes))
        .route("/scopes/:id", get(get_scope))
        .route("/disciplines", get(list_disciplines))
        .route("/disciplines/:id", get(get_discipline))
        .route(
            "/recommendations/:scope_id/:discipline_id",
            get(get_recommendation),
        )
        .with_state(catalog)
}
