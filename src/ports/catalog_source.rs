//! Catalog Source Port - read-only listings of scopes and disciplines.

use async_trait::async_trait;

use crate::domain::catalog::{Discipline, Scope};

/// Port for loading the selectable scopes and disciplines.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List every scope, in catalog order.
    async fn list_scopes(&self) -> Result<Vec<Scope>, CatalogError>;

    /// List every discipline, in catalog order.
    async fn list_disciplines(&self) -> Result<Vec<Discipline>, CatalogError>;
}

/// Catalog listing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
