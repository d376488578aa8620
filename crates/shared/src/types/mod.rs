//! Common types used across the application.

pub mod money;

pub use money::{format_area, format_currency, format_percent, is_valid_percent};
