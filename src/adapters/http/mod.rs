//! HTTP adapters - REST API implementations.
//!
//! Serves the reference catalog as the guidance backend the assessment
//! client talks to.

pub mod assessment;

use std::sync::Arc;

use axum::Router;
use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::reference::ReferenceCatalog;
use crate::config::ServerConfig;

pub use assessment::{assessment_routes, ErrorResponse, RecommendationResponse};

/// Builds the full application router with tracing, CORS and timeout layers.
pub fn router(catalog: Arc<ReferenceCatalog>, config: &ServerConfig) -> Router {
    assessment_routes(catalog).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(cors_layer(&config.cors_origins_list())),
    )
}

/// Configured origins, or any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(
            Arc::new(ReferenceCatalog::standard()),
            &ServerConfig::default(),
        )
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to the AI Risk Assessment API");
    }

    #[tokio::test]
    async fn lists_scopes_in_order() {
        let (status, body) = get(app(), "/scopes").await;
        assert_eq!(status, StatusCode::OK);

        let scopes = body.as_array().unwrap();
        assert_eq!(scopes.len(), 5);
        assert_eq!(scopes[0]["id"], 1);
        assert_eq!(scopes[0]["name"], "Consumer App");
        assert_eq!(scopes[4]["id"], 5);
    }

    #[tokio::test]
    async fn gets_single_scope() {
        let (status, body) = get(app(), "/scopes/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Pre-trained Models");
    }

    #[tokio::test]
    async fn unknown_scope_is_404() {
        let (status, body) = get(app(), "/scopes/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SCOPE_NOT_FOUND");
    }

    #[tokio::test]
    async fn negative_scope_is_404() {
        let (status, body) = get(app(), "/scopes/-1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SCOPE_NOT_FOUND");

        let (status, body) = get(app(), "/recommendations/-1/controls").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SCOPE_NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_scope_is_400() {
        let (status, body) = get(app(), "/scopes/three").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn lists_disciplines_with_considerations() {
        let (status, body) = get(app(), "/disciplines").await;
        assert_eq!(status, StatusCode::OK);

        let disciplines = body.as_array().unwrap();
        assert_eq!(disciplines.len(), 5);
        assert_eq!(disciplines[0]["id"], "governance");
        assert!(disciplines[0]["considerations"]["1"].is_string());
    }

    #[tokio::test]
    async fn unknown_discipline_is_404() {
        let (status, body) = get(app(), "/disciplines/finance").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "DISCIPLINE_NOT_FOUND");
    }

    #[tokio::test]
    async fn recommendation_includes_scope_and_discipline() {
        let (status, body) = get(app(), "/recommendations/3/controls").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scope"]["id"], 3);
        assert_eq!(body["discipline"]["id"], "controls");
        assert_eq!(
            body["recommendation"],
            body["discipline"]["considerations"]["3"]
        );
    }

    #[tokio::test]
    async fn recommendation_for_unknown_pair_is_404() {
        let (status, body) = get(app(), "/recommendations/9/controls").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SCOPE_NOT_FOUND");

        let (status, body) = get(app(), "/recommendations/2/finance").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "DISCIPLINE_NOT_FOUND");
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/scopes")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
