//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by in-memory fakes in tests.

mod config_source;
mod http_client;

pub use config_source::{ConfigSource, InMemoryConfigSource};
pub use http_client::{HttpClient, HttpClientError};
