//! Display formatting for currency, wound area, and percentages.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every helper here takes a `rust_decimal::Decimal` and only rounds at the
//! point of display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Number of decimal places shown for wound area (square centimeters).
pub const AREA_DECIMAL_PLACES: u32 = 1;

/// Formats a currency amount as US dollars, e.g. `$29,761.00`.
///
/// Rounds half away from zero to cents and groups thousands with commas.
/// Negative amounts are rendered as `-$1,234.50`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Formats a wound area with one decimal place, e.g. `21.3`.
#[must_use]
pub fn format_area(area: Decimal) -> String {
    let rounded =
        area.round_dp_with_strategy(AREA_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}")
}

/// Formats a percentage with two decimal places, e.g. `15.00%`.
#[must_use]
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

/// Returns true if `percent` lies in the half-open range `[0, 100)`.
#[must_use]
pub fn is_valid_percent(percent: Decimal) -> bool {
    percent >= Decimal::ZERO && percent < Decimal::ONE_HUNDRED
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
