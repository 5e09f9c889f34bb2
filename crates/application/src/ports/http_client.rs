//! Transport port for issuing prepared requests.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use leadprobe_domain::{ApiResponse, PreparedRequest};

/// Errors raised by a transport adapter.
///
/// These are distinct from HTTP error statuses: an `HttpClientError` means
/// the exchange itself failed and no [`ApiResponse`] exists. A 400 or 404
/// from the service is a normal response, not one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL was rejected by the transport.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The target host actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
        /// Port the connection targeted.
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error detail.
        message: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for the HTTP transport used by the typed API client.
///
/// Implementations must be stateless between calls: the harness creates a
/// fresh client per scenario and expects no leakage across requests.
pub trait HttpClient: Send + Sync {
    /// Executes a prepared request and returns the raw response.
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, HttpClientError>> + Send + '_>>;
}
