//! Graft price table: quarterly reference prices per unit of wound area.
//!
//! The table is loaded once at startup, validated, and then shared
//! read-only. Only the active quarter participates in computation;
//! earlier quarters are kept as inert archival lists.

pub mod error;
pub mod table;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::PricingError;
pub use table::PriceTable;
pub use types::{GraftProduct, PricingQuarter};
pub use validation::PriceTableValidation;
