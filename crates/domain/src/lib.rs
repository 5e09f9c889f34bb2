//! Leadprobe Domain - Core harness types
//!
//! This crate defines the domain model for the Leads API verification
//! harness: service configuration, wire models, request templates and
//! response wrappers. All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod lead;
pub mod request;
pub mod response;

pub use config::{ConfigError, ServiceConfig, settings};
pub use error::{DomainError, DomainResult};
pub use lead::{CreatedLead, LeadRecord, NewLead, ResponseError, SubArea};
pub use request::{DEFAULT_TIMEOUT_MS, HttpMethod, PreparedRequest, RequestSpec};
pub use response::{ApiReply, ApiResponse, ReplyPayload, StatusCode};
