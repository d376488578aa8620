//! Wound-healing revenue progression.
//!
//! Projects the billable, reimbursed, cost, fee and profit amounts of a
//! course of graft treatments on a wound that closes by a fixed percentage
//! after each application.

pub mod constants;
pub mod engine;
pub mod error;
pub mod types;


pub use constants::{AREA_FLOOR, COST_RATE, MAX_INTERACTIVE_TREATMENTS, REIMBURSEMENT_RATE};
pub use engine::ProgressionEngine;
pub use error::ProgressionError;
pub use types::{Progression, ProgressionInput, ProgressionRow, ProgressionTotals};
