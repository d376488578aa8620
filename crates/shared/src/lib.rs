//! Shared errors, configuration, and display helpers for Healwise.
//!
//! This crate provides common pieces used across all other crates:
//! - Currency, area, and percentage display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, PricingConfig, ServerConfig};
pub use error::{AppError, AppResult};
