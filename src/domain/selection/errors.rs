//! Selection-specific error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Rejected selection transitions. The state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A discipline was chosen before any scope.
    #[error("a scope must be chosen before a discipline")]
    ScopeRequired,
}

impl SelectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SelectionError::ScopeRequired => ErrorCode::ScopeRequired,
        }
    }
}
