//! Guidance API client - HTTP implementation of the catalog and guidance ports.
//!
//! Talks to the assessment backend (see `adapters::http` for the server side):
//!
//! - `GET {base}/scopes`
//! - `GET {base}/disciplines`
//! - `GET {base}/recommendations/{scope_id}/{discipline_id}`
//!
//! # Configuration
//!
//! ```ignore
//! let config = GuidanceApiConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = GuidanceApiClient::new(config)?;
//! ```
//!
//! Each call issues exactly one request and never retries.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::GuidanceConfig;
use crate::domain::catalog::{Discipline, Scope};
use crate::ports::{
    CatalogError, CatalogSource, Guidance, GuidanceResolver, ResolutionError, ResolutionRequest,
};

/// Configuration for the guidance API client.
#[derive(Debug, Clone)]
pub struct GuidanceApiConfig {
    /// Backend base URL (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl GuidanceApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&GuidanceConfig> for GuidanceApiConfig {
    fn from(config: &GuidanceConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Errors constructing the client.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceApiError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Recommendation payload; scope and discipline echoes are ignored.
#[derive(Debug, Deserialize)]
struct RecommendationBody {
    recommendation: String,
}

/// HTTP client for the assessment backend.
#[derive(Debug, Clone)]
pub struct GuidanceApiClient {
    config: GuidanceApiConfig,
    base: Url,
    client: Client,
}

impl GuidanceApiClient {
    pub fn new(config: GuidanceApiConfig) -> Result<Self, GuidanceApiError> {
        let base = Url::parse(&config.base_url).map_err(|e| GuidanceApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(GuidanceApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Builds an endpoint URL below the base, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET and maps transport failures.
    async fn send(&self, url: Url) -> Result<Response, ResolutionError> {
        debug!(%url, "GET");
        self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ResolutionError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ResolutionError::network(format!("Connection failed: {}", e))
            } else {
                ResolutionError::network(e.to_string())
            }
        })
    }

    /// Rejects non-success statuses, keeping the body for context.
    async fn handle_response_status(response: Response) -> Result<Response, ResolutionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            return Err(ResolutionError::not_found(body));
        }
        Err(ResolutionError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ResolutionError> {
        let response = self.send(url).await?;
        let response = Self::handle_response_status(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ResolutionError::network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ResolutionError::parse(e.to_string()))
    }
}

fn to_catalog_error(error: ResolutionError) -> CatalogError {
    match error {
        ResolutionError::Parse(message) => CatalogError::malformed(message),
        other => CatalogError::unavailable(other.to_string()),
    }
}

#[async_trait]
impl CatalogSource for GuidanceApiClient {
    async fn list_scopes(&self) -> Result<Vec<Scope>, CatalogError> {
        self.get_json(self.endpoint(&["scopes"]))
            .await
            .map_err(to_catalog_error)
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, CatalogError> {
        self.get_json(self.endpoint(&["disciplines"]))
            .await
            .map_err(to_catalog_error)
    }
}

#[async_trait]
impl GuidanceResolver for GuidanceApiClient {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Guidance, ResolutionError> {
        let scope = request.pair.scope.to_string();
        let url = self.endpoint(&[
            "recommendations",
            scope.as_str(),
            request.pair.discipline.as_str(),
        ]);
        debug!(request_id = %request.request_id, pair = %request.pair, "Resolving guidance");

        let body: RecommendationBody = self.get_json(url).await?;
        Ok(Guidance::new(body.recommendation))
    }
}
