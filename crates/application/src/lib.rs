//! Leadprobe Application layer
//!
//! Use cases for driving verification scenarios against a Leads service:
//! the configuration resolver and the typed API client, both defined over
//! ports so transports and configuration stores stay swappable.

pub mod api;
pub mod error;
pub mod ports;
pub mod resolver;

pub use api::LeadsApi;
pub use error::{ApiError, ApiResult};
pub use ports::{ConfigSource, HttpClient, HttpClientError, InMemoryConfigSource};
pub use resolver::{resolve_base_url, resolve_config};
