use crate::shared::data::store::StoreError;
use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Failure of a page-session operation.
///
/// Everything a session can refuse to do is enumerated here so callers can
/// distinguish "fix your input" from "your id is stale".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Submit was called while no dialog was open
    #[error("no form is open")]
    FormClosed,
}

/// Result of a page-session operation
pub type DomainResult<T> = Result<T, DomainError>;
