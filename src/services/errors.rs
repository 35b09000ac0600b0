use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures returned by the service layer, one variant per client-visible kind.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced customer or credit does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The entity exists but the request violates a domain rule.
    #[error("{0}")]
    BusinessRule(String),

    /// A raw value could not be turned into a domain value.
    #[error("{0}")]
    TypeConstraint(String),

    /// The store rejected the write (duplicate tax id or email, unknown customer).
    #[error("{0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Entity not found".to_string()),
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}
