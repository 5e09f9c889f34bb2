//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It issues the prepared request as-is: no retries, no caching, and the
//! per-request timeout comes from the request itself.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, Method};
use tracing::debug;

use leadprobe_application::ports::{HttpClient, HttpClientError};
use leadprobe_domain::{ApiResponse, HttpMethod, PreparedRequest};

/// HTTP transport implementation using reqwest.
///
/// Scenarios construct a fresh instance in setup so no connection or cookie
/// state leaks between tests.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Leadprobe/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent("Leadprobe/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Maps reqwest errors onto the transport error taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }

        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return HttpClientError::DnsError { host, message };
            }
            if message.to_lowercase().contains("refused") {
                let port = error
                    .url()
                    .and_then(reqwest::Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, HttpClientError>> + Send + '_>> {
        let method = request.method;
        let url = request.url.clone();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms;

        Box::pin(async move {
            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url.clone())
                .timeout(Duration::from_millis(timeout_ms));

            if let Some(json) = &body {
                builder = builder.json(json);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            debug!(%url, status, bytes = body_bytes.len(), "exchange complete");
            Ok(ApiResponse::new(status, body_bytes))
        })
    }
}
