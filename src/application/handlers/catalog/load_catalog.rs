//! LoadCatalogHandler - Query handler loading the selectable catalog.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::ports::CatalogSource;

/// Handler for loading scopes and disciplines at startup.
///
/// Never fails: a listing that cannot be loaded comes back empty and the
/// user simply has nothing to choose from. There is no retry.
pub struct LoadCatalogHandler {
    source: Arc<dyn CatalogSource>,
}

impl LoadCatalogHandler {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Catalog {
        let (scopes, disciplines) =
            tokio::join!(self.source.list_scopes(), self.source.list_disciplines());

        let scopes = scopes.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load scopes");
            Vec::new()
        });
        let disciplines = disciplines.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load disciplines");
            Vec::new()
        });

        tracing::debug!(
            scopes = scopes.len(),
            disciplines = disciplines.len(),
            "catalog loaded"
        );
        Catalog::new(scopes, disciplines)
    }
}
