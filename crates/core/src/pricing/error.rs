//! Pricing error types.

use thiserror::Error;

/// Price table errors.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The price table document could not be read or parsed.
    #[error("Failed to load price table: {0}")]
    Load(#[from] config::ConfigError),

    /// The price table failed validation. Carries every violation found.
    #[error("Invalid price table: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
