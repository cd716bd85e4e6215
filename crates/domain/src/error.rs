//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while composing requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name is not a valid HTTP token.
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    /// A header value contains characters HTTP does not allow.
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),

    /// The request body could not be produced.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The configured API flavour is unknown.
    #[error("unknown API flavor: {0}")]
    UnknownFlavor(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
