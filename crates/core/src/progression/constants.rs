//! Fixed policy constants of the revenue progression.
//!
//! These are deliberately not inputs. Changing a rate means changing it here.

use rust_decimal::Decimal;

/// Share of the billable amount paid by the payer (80%).
pub const REIMBURSEMENT_RATE: Decimal = Decimal::from_parts(80, 0, 0, false, 2);

/// Share of the billable amount spent on product cost (60%).
pub const COST_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);

/// Smallest trackable wound area in square centimeters.
pub const AREA_FLOOR: Decimal = Decimal::ONE;

/// Decimal places of the displayed wound area.
pub const AREA_DISPLAY_DECIMAL_PLACES: u32 = 1;

/// Largest treatment count accepted from interactive callers.
pub const MAX_INTERACTIVE_TREATMENTS: u32 = 10;
