//! Leadprobe System Tests - scenario support
//!
//! Support code for the verification scenarios: per-scenario setup, random
//! test-data generation, and an in-process stand-in for the Leads service
//! so the suite runs without a deployed instance.

pub mod setup;
pub mod stub;
pub mod testdata;
