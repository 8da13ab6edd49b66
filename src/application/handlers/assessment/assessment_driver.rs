//! AssessmentDriver - runs the selection state machine against a resolver.
//!
//! The driver is the single writer of the [`Selection`]. Choosing a
//! discipline queues a resolution future; results are applied one at a time
//! as they arrive, in completion order. Nothing is cancelled: a result for a
//! superseded pair is handed to the state machine like any other and
//! discarded there.
//!
//! Queued resolutions make progress only while the driver is polled through
//! [`AssessmentDriver::next_resolution`] or [`AssessmentDriver::settle`].

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::domain::foundation::{DisciplineId, ScopeId};
use crate::domain::selection::{ResolutionApplied, Selection, SelectionError, SelectionPair};
use crate::ports::{Guidance, GuidanceResolver, ResolutionError, ResolutionRequest};

type Arrival = (ResolutionRequest, Result<Guidance, ResolutionError>);

/// Owns the selection and every resolution still outstanding.
pub struct AssessmentDriver {
    resolver: Arc<dyn GuidanceResolver>,
    selection: Selection,
    pending: FuturesUnordered<BoxFuture<'static, Arrival>>,
}

impl AssessmentDriver {
    pub fn new(resolver: Arc<dyn GuidanceResolver>) -> Self {
        Self {
            resolver,
            selection: Selection::new(),
            pending: FuturesUnordered::new(),
        }
    }

    /// Current selection, for presentation.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn choose_scope(&mut self, id: ScopeId) {
        tracing::debug!(scope = %id, "scope chosen");
        self.selection.choose_scope(id);
    }

    /// Chooses a discipline and queues the resolution of the new pair.
    ///
    /// Without a scope the choice is rejected and no resolution is queued.
    pub fn choose_discipline(&mut self, id: DisciplineId) -> Result<SelectionPair, SelectionError> {
        let pair = self.selection.choose_discipline(id).map_err(|error| {
            tracing::warn!(code = %error.code(), %error, "discipline rejected");
            error
        })?;

        let request = ResolutionRequest::new(pair.clone());
        tracing::debug!(request_id = %request.request_id, %pair, "resolution started");

        let resolver = Arc::clone(&self.resolver);
        self.pending.push(
            async move {
                let result = resolver.resolve(&request).await;
                (request, result)
            }
            .boxed(),
        );
        Ok(pair)
    }

    /// Clears the selection. Outstanding resolutions still arrive and are
    /// discarded.
    pub fn reset(&mut self) {
        tracing::debug!("selection reset");
        self.selection.reset();
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Waits for the next resolution to complete and applies it.
    ///
    /// Returns `None` immediately when nothing is outstanding. Dropping the
    /// returned future before it completes loses no result.
    pub async fn next_resolution(&mut self) -> Option<ResolutionApplied> {
        let (request, result) = self.pending.next().await?;
        Some(self.apply(request, result))
    }

    /// Drives every outstanding resolution to completion.
    pub async fn settle(&mut self) {
        while self.next_resolution().await.is_some() {}
    }

    fn apply(
        &mut self,
        request: ResolutionRequest,
        result: Result<Guidance, ResolutionError>,
    ) -> ResolutionApplied {
        let request_id = request.request_id;
        let pair = request.pair;
        let outcome = match result {
            Ok(guidance) => self.selection.on_resolution_success(&pair, guidance.text),
            Err(error) => {
                let outcome = self.selection.on_resolution_failure(&pair);
                if outcome == ResolutionApplied::Failed {
                    tracing::warn!(%request_id, %pair, %error, "resolution failed");
                }
                outcome
            }
        };

        match outcome {
            ResolutionApplied::Installed => {
                tracing::debug!(%request_id, %pair, "recommendation installed")
            }
            ResolutionApplied::Discarded => {
                tracing::debug!(%request_id, %pair, "stale resolution discarded")
            }
            ResolutionApplied::Failed => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockGuidanceResolver;
    use crate::domain::decision_table::DEFAULT_STEPS;
    use crate::domain::selection::{SelectionPhase, SelectionStatus};
    use std::time::Duration;

    fn discipline(id: &str) -> DisciplineId {
        DisciplineId::new(id).unwrap()
    }

    fn pair(scope: u32, id: &str) -> SelectionPair {
        SelectionPair::new(ScopeId::new(scope), discipline(id))
    }

    fn driver(resolver: &MockGuidanceResolver) -> AssessmentDriver {
        AssessmentDriver::new(Arc::new(resolver.clone()))
    }

    #[tokio::test]
    async fn scope_then_discipline_installs_recommendation() {
        let resolver = MockGuidanceResolver::new()
            .with_response(pair(3, "controls"), "Apply IAM policies...");
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(3));
        driver.choose_discipline(discipline("controls")).unwrap();
        assert_eq!(driver.selection().status(), SelectionStatus::Resolving);

        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Installed));

        let recommendation = driver.selection().recommendation().unwrap();
        assert_eq!(recommendation.text(), "Apply IAM policies...");
        assert_eq!(
            recommendation.steps(),
            [
                "Implement IAM policies for model endpoint access",
                "Build application layer authorization",
                "Apply input validation and output filtering",
                "Deploy guardrails and content filtering",
            ]
        );
        assert!(!driver.selection().is_resolving());
        assert_eq!(driver.selection().phase(), SelectionPhase::Resolved);
        assert_eq!(resolver.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_scope_uses_default_steps() {
        let resolver = MockGuidanceResolver::new();
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(99));
        driver.choose_discipline(discipline("legal")).unwrap();
        driver.settle().await;

        let recommendation = driver.selection().recommendation().unwrap();
        assert_eq!(recommendation.steps(), DEFAULT_STEPS);
    }

    #[tokio::test]
    async fn discipline_before_scope_issues_no_call() {
        let resolver = MockGuidanceResolver::new();
        let mut driver = driver(&resolver);

        let result = driver.choose_discipline(discipline("risk"));

        assert_eq!(result, Err(SelectionError::ScopeRequired));
        assert_eq!(
            result.unwrap_err().code(),
            crate::domain::foundation::ErrorCode::ScopeRequired
        );
        assert!(!driver.has_pending());
        assert_eq!(driver.next_resolution().await, None);
        assert_eq!(resolver.call_count(), 0);
        assert_eq!(driver.selection().phase(), SelectionPhase::Idle);
    }

    #[tokio::test]
    async fn slow_superseded_result_is_discarded() {
        let resolver = MockGuidanceResolver::new()
            .with_response(pair(2, "governance"), "text for A")
            .with_delay(pair(2, "governance"), Duration::from_millis(80))
            .with_response(pair(2, "resilience"), "text for B")
            .with_delay(pair(2, "resilience"), Duration::from_millis(10));
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(2));
        driver.choose_discipline(discipline("governance")).unwrap();
        driver.choose_discipline(discipline("resilience")).unwrap();
        assert_eq!(driver.pending_count(), 2);

        // B arrives first, then A
        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Installed));
        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Discarded));
        assert_eq!(driver.next_resolution().await, None);

        let recommendation = driver.selection().recommendation().unwrap();
        assert_eq!(recommendation.text(), "text for B");
        assert_eq!(recommendation.pair(), &pair(2, "resilience"));
        assert_eq!(resolver.call_count(), 2);
    }

    #[tokio::test]
    async fn fast_superseded_result_is_discarded() {
        let resolver = MockGuidanceResolver::new()
            .with_response(pair(1, "legal"), "text for A")
            .with_response(pair(1, "risk"), "text for B")
            .with_delay(pair(1, "risk"), Duration::from_millis(40));
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(1));
        driver.choose_discipline(discipline("legal")).unwrap();
        driver.choose_discipline(discipline("risk")).unwrap();

        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Discarded));
        assert_eq!(driver.selection().status(), SelectionStatus::Resolving);
        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Installed));

        assert_eq!(driver.selection().recommendation().unwrap().text(), "text for B");
    }

    #[tokio::test]
    async fn scope_change_discards_pending_result() {
        let resolver = MockGuidanceResolver::new();
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(4));
        driver.choose_discipline(discipline("controls")).unwrap();
        driver.choose_scope(ScopeId::new(5));
        driver.settle().await;

        assert_eq!(driver.selection().phase(), SelectionPhase::ScopeChosen);
        assert!(driver.selection().recommendation().is_none());
    }

    #[tokio::test]
    async fn reset_discards_pending_result() {
        let resolver = MockGuidanceResolver::new();
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(4));
        driver.choose_discipline(discipline("controls")).unwrap();
        driver.reset();
        driver.settle().await;

        assert_eq!(driver.selection(), &Selection::new());
        // not cancelled, just ignored
        assert_eq!(resolver.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_leaves_selection_without_recommendation() {
        let resolver = MockGuidanceResolver::failing(ResolutionError::network("refused"));
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(3));
        driver.choose_discipline(discipline("risk")).unwrap();

        assert_eq!(driver.next_resolution().await, Some(ResolutionApplied::Failed));
        assert_eq!(driver.selection().status(), SelectionStatus::Unavailable);
        assert_eq!(driver.selection().scope(), Some(ScopeId::new(3)));
        assert_eq!(driver.selection().discipline(), Some(&discipline("risk")));
        // no retry
        assert_eq!(resolver.call_count(), 1);
    }

    #[tokio::test]
    async fn rechoosing_discipline_after_failure_resolves_again() {
        let resolver = MockGuidanceResolver::new()
            .with_error(pair(3, "risk"), ResolutionError::Timeout { timeout_secs: 30 });
        let mut driver = driver(&resolver);

        driver.choose_scope(ScopeId::new(3));
        driver.choose_discipline(discipline("risk")).unwrap();
        driver.settle().await;
        assert_eq!(driver.selection().status(), SelectionStatus::Unavailable);

        // clones share configuration; the backend recovers
        let _ = resolver
            .clone()
            .with_response(pair(3, "risk"), "Assess third-party provider risks.");
        driver.choose_discipline(discipline("risk")).unwrap();
        driver.settle().await;

        assert_eq!(driver.selection().status(), SelectionStatus::Ready);
        let recommendation = driver.selection().recommendation().unwrap();
        assert_eq!(recommendation.pair(), &pair(3, "risk"));
        assert_eq!(recommendation.text(), "Assess third-party provider risks.");
        assert_eq!(resolver.call_count(), 2);
        assert!(resolver.calls().iter().all(|call| call.pair == pair(3, "risk")));
    }
}
