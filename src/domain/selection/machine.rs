//! Selection - the client-held state machine sequencing the two choices.
//!
//! Only user intents (`choose_scope`, `choose_discipline`, `reset`) and
//! resolution results mutate the state. Results are tagged with the pair they
//! were requested for; a result whose pair no longer matches the live
//! selection is dropped, so overlapping resolutions can never install a
//! recommendation for a superseded pair.

use serde::Serialize;

use crate::domain::foundation::{DisciplineId, ScopeId, StateMachine};

use super::{Recommendation, SelectionError, SelectionPair, SelectionPhase, SelectionStatus};

/// What applying a resolution result did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionApplied {
    /// A recommendation was installed for the live pair.
    Installed,
    /// The live pair's resolution failed; no recommendation, not loading.
    Failed,
    /// The result no longer applies and was dropped without a state change.
    Discarded,
}

/// Selection state: the only mutable entity in the assessment core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    scope: Option<ScopeId>,
    discipline: Option<DisciplineId>,
    recommendation: Option<Recommendation>,
    in_flight: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    pub fn discipline(&self) -> Option<&DisciplineId> {
        self.discipline.as_ref()
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// True while a resolution for the live pair is outstanding.
    pub fn is_resolving(&self) -> bool {
        self.in_flight
    }

    /// The live (scope, discipline) pair, once both are chosen.
    pub fn current_pair(&self) -> Option<SelectionPair> {
        match (self.scope, &self.discipline) {
            (Some(scope), Some(discipline)) => Some(SelectionPair::new(scope, discipline.clone())),
            _ => None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (&self.scope, &self.discipline, &self.recommendation) {
            (None, _, _) => SelectionPhase::Idle,
            (Some(_), None, _) => SelectionPhase::ScopeChosen,
            (Some(_), Some(_), None) => SelectionPhase::DisciplinesPending,
            (Some(_), Some(_), Some(_)) => SelectionPhase::Resolved,
        }
    }

    pub fn status(&self) -> SelectionStatus {
        match self.phase() {
            SelectionPhase::Idle => SelectionStatus::AwaitingScope,
            SelectionPhase::ScopeChosen => SelectionStatus::AwaitingDiscipline,
            SelectionPhase::DisciplinesPending if self.in_flight => SelectionStatus::Resolving,
            SelectionPhase::DisciplinesPending => SelectionStatus::Unavailable,
            SelectionPhase::Resolved => SelectionStatus::Ready,
        }
    }

    /// Chooses a scope. Valid from any phase; clears everything downstream.
    pub fn choose_scope(&mut self, id: ScopeId) {
        self.scope = Some(id);
        self.discipline = None;
        self.recommendation = None;
        self.in_flight = false;
    }

    /// Chooses a discipline for the current scope.
    ///
    /// Returns the pair the caller must resolve. Rejected without any state
    /// change when no scope has been chosen.
    pub fn choose_discipline(&mut self, id: DisciplineId) -> Result<SelectionPair, SelectionError> {
        self.phase()
            .transition_to(SelectionPhase::DisciplinesPending)
            .map_err(|_| SelectionError::ScopeRequired)?;
        let scope = self.scope.ok_or(SelectionError::ScopeRequired)?;

        self.discipline = Some(id.clone());
        self.recommendation = None;
        self.in_flight = true;
        Ok(SelectionPair::new(scope, id))
    }

    /// Applies resolved guidance text for `pair`.
    pub fn on_resolution_success(
        &mut self,
        pair: &SelectionPair,
        text: impl Into<String>,
    ) -> ResolutionApplied {
        if !self.is_live(pair) || self.phase().transition_to(SelectionPhase::Resolved).is_err() {
            return ResolutionApplied::Discarded;
        }
        self.recommendation = Some(Recommendation::compose(pair.clone(), text));
        self.in_flight = false;
        ResolutionApplied::Installed
    }

    /// Applies a failed resolution for `pair`.
    ///
    /// An already installed recommendation for the same pair is kept.
    pub fn on_resolution_failure(&mut self, pair: &SelectionPair) -> ResolutionApplied {
        if !self.is_live(pair) || self.recommendation.is_some() {
            return ResolutionApplied::Discarded;
        }
        self.in_flight = false;
        ResolutionApplied::Failed
    }

    /// Returns to `Idle` from any phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_live(&self, pair: &SelectionPair) -> bool {
        self.scope == Some(pair.scope) && self.discipline.as_ref() == Some(&pair.discipline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_table::DEFAULT_STEPS;

    fn discipline(id: &str) -> DisciplineId {
        DisciplineId::new(id).unwrap()
    }

    fn scoped(scope: u32) -> Selection {
        let mut selection = Selection::new();
        selection.choose_scope(ScopeId::new(scope));
        selection
    }

    fn pending(scope: u32, id: &str) -> (Selection, SelectionPair) {
        let mut selection = scoped(scope);
        let pair = selection.choose_discipline(discipline(id)).unwrap();
        (selection, pair)
    }

    fn resolved(scope: u32, id: &str) -> Selection {
        let (mut selection, pair) = pending(scope, id);
        selection.on_resolution_success(&pair, "guidance");
        selection
    }

    fn failed(scope: u32, id: &str) -> Selection {
        let (mut selection, pair) = pending(scope, id);
        selection.on_resolution_failure(&pair);
        selection
    }

    fn every_phase() -> Vec<Selection> {
        vec![
            Selection::new(),
            scoped(1),
            pending(2, "risk").0,
            failed(4, "legal"),
            resolved(5, "governance"),
        ]
    }

    #[test]
    fn new_selection_is_idle() {
        let selection = Selection::new();
        assert_eq!(selection.phase(), SelectionPhase::Idle);
        assert_eq!(selection.status(), SelectionStatus::AwaitingScope);
        assert!(selection.current_pair().is_none());
    }

    #[test]
    fn choose_scope_lands_in_scope_chosen() {
        let selection = scoped(3);
        assert_eq!(selection.phase(), SelectionPhase::ScopeChosen);
        assert_eq!(selection.status(), SelectionStatus::AwaitingDiscipline);
        assert_eq!(selection.scope(), Some(ScopeId::new(3)));
    }

    #[test]
    fn choose_scope_clears_everything_from_any_phase() {
        for mut selection in every_phase() {
            selection.choose_scope(ScopeId::new(2));
            assert_eq!(selection.phase(), SelectionPhase::ScopeChosen);
            assert_eq!(selection.scope(), Some(ScopeId::new(2)));
            assert!(selection.discipline().is_none());
            assert!(selection.recommendation().is_none());
            assert!(!selection.is_resolving());
        }
    }

    #[test]
    fn choose_discipline_before_scope_is_rejected_without_change() {
        let mut selection = Selection::new();
        let result = selection.choose_discipline(discipline("controls"));

        assert_eq!(result, Err(SelectionError::ScopeRequired));
        assert_eq!(selection, Selection::new());
        assert_eq!(selection.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn choose_discipline_emits_pair_and_sets_in_flight() {
        let (selection, pair) = pending(3, "controls");
        assert_eq!(pair, SelectionPair::new(ScopeId::new(3), discipline("controls")));
        assert_eq!(selection.phase(), SelectionPhase::DisciplinesPending);
        assert_eq!(selection.status(), SelectionStatus::Resolving);
        assert!(selection.is_resolving());
        assert_eq!(selection.current_pair(), Some(pair));
    }

    #[test]
    fn choose_discipline_clears_previous_recommendation() {
        let mut selection = resolved(3, "controls");
        selection.choose_discipline(discipline("risk")).unwrap();
        assert!(selection.recommendation().is_none());
        assert!(selection.is_resolving());
    }

    #[test]
    fn success_for_live_pair_installs_merged_recommendation() {
        let (mut selection, pair) = pending(3, "controls");
        let applied = selection.on_resolution_success(&pair, "Apply IAM policies...");

        assert_eq!(applied, ResolutionApplied::Installed);
        assert_eq!(selection.phase(), SelectionPhase::Resolved);
        assert_eq!(selection.status(), SelectionStatus::Ready);
        assert!(!selection.is_resolving());

        let rec = selection.recommendation().unwrap();
        assert_eq!(rec.text(), "Apply IAM policies...");
        assert_eq!(
            rec.steps(),
            [
                "Implement IAM policies for model endpoint access",
                "Build application layer authorization",
                "Apply input validation and output filtering",
                "Deploy guardrails and content filtering",
            ]
        );
    }

    #[test]
    fn unmapped_scope_gets_default_steps() {
        let (mut selection, pair) = pending(99, "legal");
        selection.on_resolution_success(&pair, "whatever the backend says");
        assert_eq!(selection.recommendation().unwrap().steps(), DEFAULT_STEPS);
    }

    #[test]
    fn stale_success_after_newer_discipline_is_discarded() {
        let mut selection = scoped(3);
        let a = selection.choose_discipline(discipline("governance")).unwrap();
        let b = selection.choose_discipline(discipline("controls")).unwrap();
        let before = selection.clone();

        assert_eq!(
            selection.on_resolution_success(&a, "stale"),
            ResolutionApplied::Discarded
        );
        assert_eq!(selection, before);
        assert_eq!(selection.current_pair(), Some(b.clone()));
        assert!(selection.is_resolving());

        assert_eq!(
            selection.on_resolution_success(&b, "fresh"),
            ResolutionApplied::Installed
        );
        assert_eq!(selection.recommendation().unwrap().text(), "fresh");
    }

    #[test]
    fn stale_success_arriving_after_newer_resolution_is_discarded() {
        let mut selection = scoped(3);
        let a = selection.choose_discipline(discipline("governance")).unwrap();
        let b = selection.choose_discipline(discipline("controls")).unwrap();
        selection.on_resolution_success(&b, "fresh");

        assert_eq!(
            selection.on_resolution_success(&a, "stale"),
            ResolutionApplied::Discarded
        );
        let rec = selection.recommendation().unwrap();
        assert_eq!(rec.text(), "fresh");
        assert_eq!(rec.pair(), &b);
    }

    #[test]
    fn stale_success_after_scope_change_is_discarded() {
        let (mut selection, pair) = pending(3, "controls");
        selection.choose_scope(ScopeId::new(4));

        assert_eq!(
            selection.on_resolution_success(&pair, "stale"),
            ResolutionApplied::Discarded
        );
        assert_eq!(selection.phase(), SelectionPhase::ScopeChosen);
    }

    #[test]
    fn stale_success_after_reset_is_discarded() {
        let (mut selection, pair) = pending(3, "controls");
        selection.reset();

        assert_eq!(
            selection.on_resolution_success(&pair, "stale"),
            ResolutionApplied::Discarded
        );
        assert_eq!(selection, Selection::new());
    }

    #[test]
    fn failure_for_live_pair_clears_loading_and_keeps_selection() {
        let (mut selection, pair) = pending(3, "controls");
        let applied = selection.on_resolution_failure(&pair);

        assert_eq!(applied, ResolutionApplied::Failed);
        assert_eq!(selection.phase(), SelectionPhase::DisciplinesPending);
        assert_eq!(selection.status(), SelectionStatus::Unavailable);
        assert!(!selection.is_resolving());
        assert!(selection.recommendation().is_none());
        assert_eq!(selection.current_pair(), Some(pair));
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut selection = scoped(3);
        let a = selection.choose_discipline(discipline("governance")).unwrap();
        selection.choose_discipline(discipline("controls")).unwrap();

        assert_eq!(selection.on_resolution_failure(&a), ResolutionApplied::Discarded);
        assert!(selection.is_resolving());
    }

    #[test]
    fn late_failure_does_not_remove_installed_recommendation() {
        let mut selection = scoped(3);
        let first = selection.choose_discipline(discipline("controls")).unwrap();
        let second = selection.choose_discipline(discipline("controls")).unwrap();
        selection.on_resolution_success(&second, "fresh");

        assert_eq!(
            selection.on_resolution_failure(&first),
            ResolutionApplied::Discarded
        );
        assert_eq!(selection.recommendation().unwrap().text(), "fresh");
    }

    #[test]
    fn retry_after_failure_resolves() {
        let mut selection = failed(3, "risk");
        let pair = selection.choose_discipline(discipline("risk")).unwrap();
        assert_eq!(selection.status(), SelectionStatus::Resolving);

        selection.on_resolution_success(&pair, "second time lucky");
        assert_eq!(selection.status(), SelectionStatus::Ready);
    }

    #[test]
    fn reset_from_any_phase_yields_idle() {
        for mut selection in every_phase() {
            selection.reset();
            assert_eq!(selection.phase(), SelectionPhase::Idle);
            assert!(selection.scope().is_none());
            assert!(selection.discipline().is_none());
            assert!(selection.recommendation().is_none());
            assert!(!selection.is_resolving());
        }
    }

    #[test]
    fn recommendation_always_matches_live_pair() {
        let selection = resolved(2, "resilience");
        let rec = selection.recommendation().unwrap();
        assert_eq!(Some(rec.pair().clone()), selection.current_pair());
    }
}
