//! Request templates and path resolution.
//!
//! A [`RequestSpec`] is a method plus a path template with `{name}`
//! placeholders, an optional JSON body and a per-request timeout. Resolving
//! it against a base URL substitutes the caller-supplied segments and
//! produces a [`PreparedRequest`] ready for a transport adapter.

use serde::Serialize;
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP methods issued by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
}

impl HttpMethod {
    /// Returns the method name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request template relative to a base URL.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: HttpMethod,
    path: String,
    segments: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a GET template for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST template for `path`.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segments: Vec::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Supplies a value for the `{name}` placeholder in the path.
    #[must_use]
    pub fn with_segment(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.segments.push((name.into(), value.into()));
        self
    }

    /// Attaches a JSON body serialized from `body`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if `body` cannot be serialized.
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the method of this template.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Resolves the template against `base`, substituting all placeholders.
    ///
    /// The path joins underneath the base URL's path component, so a base of
    /// `http://host:port/api/` plus `/Leads/{id}` yields
    /// `http://host:port/api/Leads/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnresolvedPlaceholder`] if a placeholder has no
    /// supplied segment, or [`DomainError::InvalidUrl`] if the joined URL is
    /// malformed.
    pub fn resolve(&self, base: &Url) -> DomainResult<PreparedRequest> {
        let mut path = self.path.clone();
        for (name, value) in &self.segments {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        if let Some(open) = path.find('{') {
            let rest = &path[open + 1..];
            let name = rest.split('}').next().unwrap_or(rest);
            return Err(DomainError::UnresolvedPlaceholder(name.to_owned()));
        }
        let url = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")))?;
        Ok(PreparedRequest {
            method: self.method,
            url,
            body: self.body.clone(),
            timeout_ms: self.timeout_ms,
        })
    }
}

/// A fully resolved request, ready for a transport adapter.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method to issue.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: Url,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}
