//! Leadprobe Infrastructure - adapters
//!
//! Concrete implementations of the application-layer ports: a reqwest-based
//! HTTP transport and an environment-variable configuration source.

pub mod adapters;

pub use adapters::{EnvConfigSource, ReqwestHttpClient};
