//! Storage Layer
//!
//! Persisted application configuration. Session state persists itself
//! separately (see `crate::state`).

pub mod config;

pub use config::ConfigService;
