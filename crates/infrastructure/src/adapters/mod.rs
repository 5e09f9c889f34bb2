//! Port adapters.

mod env_config;
mod reqwest_client;

pub use env_config::EnvConfigSource;
pub use reqwest_client::ReqwestHttpClient;
