//! Progression input errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a progression request is rejected before computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// No graft product was selected.
    #[error("Missing product selection")]
    MissingProduct,

    /// The selected product has a zero or negative unit price.
    #[error("Unit price must be positive, got {0}")]
    NonPositiveUnitPrice(Decimal),

    /// The starting wound area is zero or negative.
    #[error("Initial wound area must be positive, got {0}")]
    NonPositiveArea(Decimal),

    /// Treatment count is zero.
    #[error("Treatment count must be at least 1")]
    NoTreatments,

    /// Treatment count exceeds the interactive cap.
    #[error("Treatment count must not exceed {max}, got {got}")]
    TooManyTreatments {
        /// Largest accepted count.
        max: u32,
        /// Requested count.
        got: u32,
    },

    /// Closure rate outside [0, 100).
    #[error("Closure rate must be at least 0 and below 100 percent, got {0}")]
    InvalidClosureRate(Decimal),

    /// Billing fee outside [0, 100).
    #[error("Billing fee must be at least 0 and below 100 percent, got {0}")]
    InvalidBillingFee(Decimal),

    /// Area, unit price and treatment count together exceed the range of
    /// exact decimal amounts.
    #[error("Projected amounts are too large: area {area} at unit price {unit_price} over {treatment_count} treatments")]
    AmountOutOfRange {
        /// Requested initial area.
        area: Decimal,
        /// Unit price of the selected product.
        unit_price: Decimal,
        /// Requested treatment count.
        treatment_count: u32,
    },
}
