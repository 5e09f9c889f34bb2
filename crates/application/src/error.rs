//! Application error types

use thiserror::Error;

use leadprobe_domain::DomainError;

use crate::ports::HttpClientError;

/// Errors surfaced by the typed API client.
///
/// Service-reported validation failures are not errors here: they come back
/// as data inside a reply so scenarios can assert on them. An `ApiError`
/// means the exchange itself never produced an HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request template failed to build or resolve.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The transport failed; the service was not reached or did not answer.
    #[error(transparent)]
    Transport(#[from] HttpClientError),
}

/// Result type alias for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;
