//! Reference catalog adapter.
//!
//! Built-in scoping matrix: the five generative AI scopes, the five security
//! disciplines and a consideration text for every pair. Serves both as a
//! [`CatalogSource`] and as an offline [`GuidanceResolver`], and backs the
//! HTTP API in `adapters::http`.

mod data;

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::catalog::{Catalog, Discipline, Scope};
use crate::domain::foundation::{DisciplineId, DomainError, ErrorCode, ScopeId};
use crate::ports::{
    CatalogError, CatalogSource, Guidance, GuidanceResolver, ResolutionError, ResolutionRequest,
};

/// Guidance for a known scope and discipline that has no consideration text.
pub const NO_SPECIFIC_RECOMMENDATION: &str =
    "No specific recommendation available for this combination.";

/// A discipline together with its per-scope consideration text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineEntry {
    #[serde(flatten)]
    pub discipline: Discipline,
    pub considerations: BTreeMap<ScopeId, String>,
}

/// Resolved guidance with the scope and discipline it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceGuidance<'a> {
    pub scope: &'a Scope,
    pub discipline: &'a DisciplineEntry,
    pub text: &'a str,
}

/// In-process catalog and guidance source.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    scopes: Vec<Scope>,
    disciplines: Vec<DisciplineEntry>,
}

impl ReferenceCatalog {
    pub fn new(scopes: Vec<Scope>, disciplines: Vec<DisciplineEntry>) -> Self {
        Self {
            scopes,
            disciplines,
        }
    }

    /// The built-in five-by-five scoping matrix.
    pub fn standard() -> Self {
        Self::new(data::SCOPES.clone(), data::DISCIPLINES.clone())
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn disciplines(&self) -> &[DisciplineEntry] {
        &self.disciplines
    }

    /// Catalog view without consideration texts.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.scopes.clone(),
            self.disciplines.iter().map(|d| d.discipline.clone()).collect(),
        )
    }

    pub fn scope(&self, id: ScopeId) -> Result<&Scope, DomainError> {
        self.scopes
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ScopeNotFound, "Scope not found")
                    .with_detail("scope_id", id.to_string())
            })
    }

    pub fn discipline(&self, id: &DisciplineId) -> Result<&DisciplineEntry, DomainError> {
        self.disciplines
            .iter()
            .find(|d| &d.discipline.id == id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DisciplineNotFound, "Discipline not found")
                    .with_detail("discipline_id", id.to_string())
            })
    }

    /// Looks up the consideration text for a pair.
    ///
    /// Unknown scope or discipline is an error; a known pair without text
    /// yields [`NO_SPECIFIC_RECOMMENDATION`].
    pub fn guidance(
        &self,
        scope_id: ScopeId,
        discipline_id: &DisciplineId,
    ) -> Result<ReferenceGuidance<'_>, DomainError> {
        let scope = self.scope(scope_id)?;
        let discipline = self.discipline(discipline_id)?;
        let text = discipline
            .considerations
            .get(&scope_id)
            .map(String::as_str)
            .unwrap_or(NO_SPECIFIC_RECOMMENDATION);

        Ok(ReferenceGuidance {
            scope,
            discipline,
            text,
        })
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[async_trait]
impl CatalogSource for ReferenceCatalog {
    async fn list_scopes(&self) -> Result<Vec<Scope>, CatalogError> {
        Ok(self.scopes.clone())
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, CatalogError> {
        Ok(self
            .disciplines
            .iter()
            .map(|d| d.discipline.clone())
            .collect())
    }
}

#[async_trait]
impl GuidanceResolver for ReferenceCatalog {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<Guidance, ResolutionError> {
        debug!(request_id = %request.request_id, pair = %request.pair, "Resolving from reference catalog");
        self.guidance(request.pair.scope, &request.pair.discipline)
            .map(|g| Guidance::new(g.text))
            .map_err(|e| ResolutionError::not_found(e.message))
    }
}
