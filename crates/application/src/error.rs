//! Application error types

use reqres_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Errors an endpoint call can end with.
///
/// Status codes are never errors here; a 4xx or 5xx response is returned
/// to the caller like any other.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The request could not be composed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
