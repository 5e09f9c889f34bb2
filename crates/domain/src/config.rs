//! Service connection configuration.
//!
//! A [`ServiceConfig`] holds the four connection parameters for the service
//! under test and turns them into a base URL. Validation happens up front:
//! a constructed config is guaranteed to yield a well-formed URL.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Canonical setting names read from a configuration source.
pub mod settings {
    /// URL scheme, e.g. `http` or `https`.
    pub const PROTOCOL: &str = "protocol";
    /// Host name or address of the service under test.
    pub const HOST: &str = "host";
    /// TCP port the service listens on.
    pub const PORT_IIS: &str = "portIIS";
    /// Path prefix under which the API is mounted.
    pub const BASE_PATH: &str = "basePath";
}

/// Errors raised while resolving or validating service configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    #[error("missing required setting: {name}")]
    MissingSetting {
        /// Name of the setting that was absent or empty.
        name: &'static str,
    },

    /// The port setting is present but not a valid TCP port.
    #[error("invalid port '{value}' for setting {name}")]
    InvalidPort {
        /// Name of the port setting.
        name: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The resolved values do not combine into a well-formed URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Connection parameters for the service under test.
///
/// Immutable once constructed; a scenario resolves one of these during
/// setup and derives its base URL from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    protocol: String,
    host: String,
    port: u16,
    base_path: String,
}

impl ServiceConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] if `protocol`, `host` or
    /// `base_path` is empty, or [`ConfigError::InvalidPort`] if `port` is 0.
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        base_path: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let protocol = non_empty(protocol.into(), settings::PROTOCOL)?;
        let host = non_empty(host.into(), settings::HOST)?;
        let base_path = non_empty(base_path.into(), settings::BASE_PATH)?;
        if port == 0 {
            return Err(ConfigError::InvalidPort {
                name: settings::PORT_IIS,
                value: port.to_string(),
            });
        }
        Ok(Self {
            protocol,
            host,
            port,
            base_path,
        })
    }

    /// Returns the URL scheme.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Returns the service host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the service port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the raw base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Builds the base URL for this configuration.
    ///
    /// The path component is normalized to start and end with `/` so that
    /// relative request paths join underneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the components do not form
    /// a syntactically valid URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut path = self.base_path.clone();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if !path.ends_with('/') {
            path.push('/');
        }
        let raw = format!("{}://{}:{}{}", self.protocol, self.host, self.port, path);
        Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl(format!("{e}: {raw}")))
    }
}

fn non_empty(value: String, name: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::MissingSetting { name })
    } else {
        Ok(value)
    }
}
