//! Configuration lookup port.

use std::collections::HashMap;

/// Port for reading named configuration settings.
///
/// The resolver asks for each setting by name; a source returns the raw
/// string value or `None` when the setting is not defined. Sources never
/// apply defaults.
pub trait ConfigSource {
    /// Returns the raw value for `name`, if the source defines it.
    fn get(&self, name: &str) -> Option<String>;
}

/// In-memory configuration source for tests and programmatic setup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    values: HashMap<String, String>,
}

impl InMemoryConfigSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
