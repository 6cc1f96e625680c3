//! Shared utilities, configuration, and error handling for DevHeaven
//!
//! This crate provides common functionality used across the job board API:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP rendering
//! - Request body extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::{Config, Environment, StoreProvider};
pub use error::{Error, Result};
pub use extractors::JsonObject;
