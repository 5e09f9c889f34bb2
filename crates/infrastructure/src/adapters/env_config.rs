//! Environment-variable configuration source.
//!
//! Maps the harness's setting names onto `LEADS_API_*` environment
//! variables: `protocol` → `LEADS_API_PROTOCOL`, `portIIS` →
//! `LEADS_API_PORT_IIS`, `basePath` → `LEADS_API_BASE_PATH`.

use leadprobe_application::ports::ConfigSource;

/// Prefix applied to every mapped environment variable.
const ENV_PREFIX: &str = "LEADS_API_";

/// Configuration source backed by process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    /// Creates the environment-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the environment variable name for a setting.
    #[must_use]
    pub fn var_name(name: &str) -> String {
        let mut out = String::with_capacity(ENV_PREFIX.len() + name.len() + 2);
        out.push_str(ENV_PREFIX);
        let mut prev_lower = false;
        for c in name.chars() {
            if c.is_ascii_uppercase() && prev_lower {
                out.push('_');
            }
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            out.push(c.to_ascii_uppercase());
        }
        out
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(Self::var_name(name)).ok()
    }
}
