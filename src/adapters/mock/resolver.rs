//! Mock guidance resolver.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::selection::SelectionPair;
use crate::ports::{Guidance, GuidanceResolver, ResolutionError, ResolutionRequest};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return guidance text.
    Success(String),
    /// Return an error.
    Error(ResolutionError),
}

/// Mock guidance resolver.
///
/// Responds per pair, falling back to a configurable default. Clones share
/// configuration and call history.
#[derive(Debug, Clone)]
pub struct MockGuidanceResolver {
    responses: Arc<Mutex<HashMap<SelectionPair, MockResponse>>>,
    delays: Arc<Mutex<HashMap<SelectionPair, Duration>>>,
    fallback: MockResponse,
    calls: Arc<Mutex<Vec<ResolutionRequest>>>,
}

impl Default for MockGuidanceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGuidanceResolver {
    /// Creates a resolver that answers every pair with fixed text.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            fallback: MockResponse::Success("Mock guidance".to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a resolver that fails every pair unless configured otherwise.
    pub fn failing(error: ResolutionError) -> Self {
        Self {
            fallback: MockResponse::Error(error),
            ..Self::new()
        }
    }

    /// Sets the text returned for a pair.
    pub fn with_response(self, pair: SelectionPair, text: impl Into<String>) -> Self {
        self.lock_responses()
            .insert(pair, MockResponse::Success(text.into()));
        self
    }

    /// Sets the error returned for a pair.
    pub fn with_error(self, pair: SelectionPair, error: ResolutionError) -> Self {
        self.lock_responses().insert(pair, MockResponse::Error(error));
        self
    }

    /// Delays responses for a pair.
    pub fn with_delay(self, pair: SelectionPair, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(pair, delay);
        self
    }

    /// Every request received so far, in call order.
    pub fn calls(&self) -> Vec<ResolutionRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<SelectionPair, MockResponse>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GuidanceResolver for MockGuidanceResolver {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Guidance, ResolutionError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let delay = self
            .delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&request.pair)
            .copied();
        if let Some(delay) = delay {
            sleep(delay).await;
        }

        let response = self
            .lock_responses()
            .get(&request.pair)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());

        match response {
            MockResponse::Success(text) => Ok(Guidance::new(text)),
            MockResponse::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DisciplineId, ScopeId};

    fn pair(scope: u32, discipline: &str) -> SelectionPair {
        SelectionPair::new(ScopeId::new(scope), DisciplineId::new(discipline).unwrap())
    }

    #[tokio::test]
    async fn returns_configured_text_per_pair() {
        let resolver = MockGuidanceResolver::new().with_response(pair(3, "controls"), "IAM");
        let guidance = resolver
            .resolve(&ResolutionRequest::new(pair(3, "controls")))
            .await
            .unwrap();
        assert_eq!(guidance.text, "IAM");
    }

    #[tokio::test]
    async fn falls_back_for_unconfigured_pairs() {
        let resolver = MockGuidanceResolver::new();
        let guidance = resolver
            .resolve(&ResolutionRequest::new(pair(1, "risk")))
            .await
            .unwrap();
        assert_eq!(guidance.text, "Mock guidance");
    }

    #[tokio::test]
    async fn failing_resolver_returns_error() {
        let resolver = MockGuidanceResolver::failing(ResolutionError::network("down"));
        let result = resolver.resolve(&ResolutionRequest::new(pair(1, "risk"))).await;
        assert_eq!(result, Err(ResolutionError::network("down")));
    }

    #[tokio::test]
    async fn tracks_calls_across_clones() {
        let resolver = MockGuidanceResolver::new();
        let clone = resolver.clone();
        clone
            .resolve(&ResolutionRequest::new(pair(2, "legal")))
            .await
            .unwrap();
        assert_eq!(resolver.call_count(), 1);
        assert_eq!(resolver.calls()[0].pair, pair(2, "legal"));
    }
}
