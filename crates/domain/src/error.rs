//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or resolving requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A path template still contains a placeholder after substitution.
    #[error("unresolved path placeholder: {{{0}}}")]
    UnresolvedPlaceholder(String),

    /// The request body could not be serialized to JSON.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
