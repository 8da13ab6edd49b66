//! Guidance Resolver Port - Interface for the recommendation-text backend.
//!
//! One call resolves one (scope, discipline) pair into free-text guidance.
//!
//! # Design
//!
//! - One outbound request per call: no caching, debouncing or retries
//! - Every failure is returned as a [`ResolutionError`], never a panic
//! - Staleness is not this port's concern; the selection state machine drops
//!   results for superseded pairs
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedResolver;
//!
//! #[async_trait]
//! impl GuidanceResolver for FixedResolver {
//!     async fn resolve(&self, request: &ResolutionRequest) -> Result<Guidance, ResolutionError> {
//!         Ok(Guidance::new("Apply IAM policies..."))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RequestId;
use crate::domain::selection::SelectionPair;

/// Port for resolving a selection pair into guidance text.
#[async_trait]
pub trait GuidanceResolver: Send + Sync {
    /// Resolve guidance for the request's pair.
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Guidance, ResolutionError>;
}

/// A single resolution to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Pair to resolve. Both ids are always present.
    pub pair: SelectionPair,
    /// Correlates the request with its arrival in logs.
    pub request_id: RequestId,
}

impl ResolutionRequest {
    pub fn new(pair: SelectionPair) -> Self {
        Self {
            pair,
            request_id: RequestId::new(),
        }
    }
}

/// Resolved guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub text: String,
}

impl Guidance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Guidance resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// The backend does not know the scope or discipline.
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl ResolutionError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
