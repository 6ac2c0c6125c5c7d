//! Storage-layer error model.

use thiserror::Error;

use musclemate_core::DomainError;

/// Error returned by stores and services.
///
/// `Domain` carries deterministic business failures through the storage
/// layer unchanged; `Database` wraps transport/SQL failures, which the
/// API surfaces as a generic server error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// The domain error, if this is a business failure.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            StoreError::Database(_) => None,
        }
    }
}
