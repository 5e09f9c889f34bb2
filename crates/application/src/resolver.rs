//! Configuration Resolver use case.
//!
//! Turns the four named connection settings (`protocol`, `host`, `portIIS`,
//! `basePath`) into a validated [`ServiceConfig`] and base URL. Resolution
//! fails fast on the first missing or empty setting; there are no defaults
//! and no partial construction.

use tracing::debug;
use url::Url;

use leadprobe_domain::{ConfigError, ServiceConfig, settings};

use crate::ports::ConfigSource;

/// Resolves a validated [`ServiceConfig`] from a configuration source.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSetting`] naming the first absent or empty
/// setting, or [`ConfigError::InvalidPort`] if `portIIS` is not a TCP port.
pub fn resolve_config(source: &dyn ConfigSource) -> Result<ServiceConfig, ConfigError> {
    let protocol = require(source, settings::PROTOCOL)?;
    let host = require(source, settings::HOST)?;
    let port_raw = require(source, settings::PORT_IIS)?;
    let base_path = require(source, settings::BASE_PATH)?;

    let port: u16 = port_raw.parse().map_err(|_| ConfigError::InvalidPort {
        name: settings::PORT_IIS,
        value: port_raw.clone(),
    })?;

    ServiceConfig::new(protocol, host, port, base_path)
}

/// Resolves the base URL for the service under test.
///
/// # Errors
///
/// Propagates any [`ConfigError`] from [`resolve_config`] or from URL
/// construction.
pub fn resolve_base_url(source: &dyn ConfigSource) -> Result<Url, ConfigError> {
    let url = resolve_config(source)?.base_url()?;
    debug!(base_url = %url, "resolved service base URL");
    Ok(url)
}

fn require(source: &dyn ConfigSource, name: &'static str) -> Result<String, ConfigError> {
    match source.get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSetting { name }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ports::InMemoryConfigSource;

    fn complete_source() -> InMemoryConfigSource {
        InMemoryConfigSource::new()
            .with("protocol", "http")
            .with("host", "localhost")
            .with("portIIS", "5050")
            .with("basePath", "/api")
    }

    #[test]
    fn test_complete_settings_resolve_to_base_url() {
        let url = resolve_base_url(&complete_source()).unwrap();
        assert_eq!("http://localhost:5050/api/", url.as_str());
    }

    #[test]
    fn test_each_missing_setting_is_named() {
        for name in ["protocol", "host", "portIIS", "basePath"] {
            let mut source = InMemoryConfigSource::new();
            for other in ["protocol", "host", "portIIS", "basePath"] {
                if other != name {
                    source = source.with(other, "http");
                }
            }
            let err = resolve_config(&source).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingSetting { name: missing } if missing == name),
                "expected missing `{name}`, got {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_setting_counts_as_missing() {
        let source = complete_source().with("host", "  ");
        let err = resolve_config(&source).unwrap_err();
        assert_eq!(ConfigError::MissingSetting { name: "host" }, err);
    }

    #[test]
    fn test_unparseable_port_is_rejected() {
        let source = complete_source().with("portIIS", "fifty");
        let err = resolve_config(&source).unwrap_err();
        assert_eq!(
            ConfigError::InvalidPort {
                name: "portIIS",
                value: "fifty".to_owned()
            },
            err
        );
    }
}
