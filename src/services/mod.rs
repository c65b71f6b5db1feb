//! Services coordinating repository access for the HTTP layer.

use thiserror::Error;

use crate::pagination::NotFoundPayload;
use crate::repository::errors::RepositoryError;

pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed resource (e.g. the customer) does not exist.
    #[error("resource not found")]
    NotFound,

    /// The requested list page lies past the last available page.
    #[error("page not found: {}", .0.message)]
    PageNotFound(NotFoundPayload),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
