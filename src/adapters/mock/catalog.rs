//! Mock catalog source.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::catalog::{Discipline, Scope};
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source returning fixed listings or failing on demand.
#[derive(Debug, Clone, Default)]
pub struct MockCatalogSource {
    scopes: Vec<Scope>,
    disciplines: Vec<Discipline>,
    scopes_error: Option<CatalogError>,
    disciplines_error: Option<CatalogError>,
    calls: Arc<AtomicUsize>,
}

impl MockCatalogSource {
    pub fn new(scopes: Vec<Scope>, disciplines: Vec<Discipline>) -> Self {
        Self {
            scopes,
            disciplines,
            ..Self::default()
        }
    }

    /// Fails the scope listing.
    pub fn with_scopes_error(mut self, error: CatalogError) -> Self {
        self.scopes_error = Some(error);
        self
    }

    /// Fails the discipline listing.
    pub fn with_disciplines_error(mut self, error: CatalogError) -> Self {
        self.disciplines_error = Some(error);
        self
    }

    /// Number of listing calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn list_scopes(&self) -> Result<Vec<Scope>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.scopes_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.scopes.clone()),
        }
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.disciplines_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.disciplines.clone()),
        }
    }
}
