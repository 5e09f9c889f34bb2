//! Response wrappers.
//!
//! [`ApiResponse`] is the raw outcome of an exchange: status plus unparsed
//! body. [`ApiReply`] is the typed view produced by the API client, whose
//! payload is exactly one of a success shape, a service-reported error, or
//! nothing at all.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::lead::ResponseError;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 200 OK.
    pub const OK: Self = Self(200);
    /// 400 Bad Request.
    pub const BAD_REQUEST: Self = Self(400);
    /// 404 Not Found.
    pub const NOT_FOUND: Self = Self(404);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is a 4xx client error status.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a 5xx server error status.
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 < 600
    }

    /// Returns the canonical reason phrase for the codes the harness meets.
    #[must_use]
    pub const fn reason_phrase(self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            500 => "Internal Server Error",
            503 => "Service Unavailable",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Raw response from the transport: status plus unparsed body bytes.
///
/// Created once per request and discarded after assertions.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Unparsed body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response wrapper.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            body,
        }
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the body is not valid JSON for
    /// `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The parsed payload of a reply: success shape, error body, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPayload<T> {
    /// The expected shape, parsed from a success response.
    Success(T),
    /// The service's structured error, parsed from a non-success response.
    Error(ResponseError),
    /// No parseable body (for example a bare 404).
    Empty,
}

/// Status plus typed payload, as produced by the typed API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Parsed payload.
    pub payload: ReplyPayload<T>,
}

impl<T> ApiReply<T> {
    /// Returns a reference to the success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match &self.payload {
            ReplyPayload::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the reply and returns the success payload, if any.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self.payload {
            ReplyPayload::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the service-reported error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.payload {
            ReplyPayload::Error(err) => Some(&err.message),
            _ => None,
        }
    }
}
