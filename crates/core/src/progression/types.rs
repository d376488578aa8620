//! Progression data types.

use std::ops::AddAssign;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::GraftProduct;

/// Parameters of one progression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionInput {
    /// Wound area at the first treatment, in square centimeters.
    pub initial_area: Decimal,
    /// Number of treatments to project.
    pub treatment_count: u32,
    /// Percentage of wound area closed after each treatment (15 means 15%).
    pub closure_rate_percent: Decimal,
    /// Practice billing fee as a percentage of the billable amount.
    pub billing_fee_percent: Decimal,
}

/// One projected treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRow {
    /// 1-based treatment number.
    pub treatment_index: u32,
    /// Wound area used for this row's amounts (never rounded).
    pub area_at_treatment: Decimal,
    /// `area_at_treatment` rounded to one decimal place, for display.
    pub display_area: Decimal,
    /// Price per square centimeter of the selected product.
    pub unit_price: Decimal,
    /// Area times unit price.
    pub total_billable: Decimal,
    /// Portion of the billable amount paid by the payer.
    pub reimbursed_amount: Decimal,
    /// Product cost.
    pub cost_amount: Decimal,
    /// Practice billing fee.
    pub billing_fee_amount: Decimal,
    /// Reimbursed minus cost.
    pub gross_profit: Decimal,
    /// Gross profit minus billing fee.
    pub net_profit: Decimal,
}

/// Sums across every row of a progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTotals {
    /// Sum of `area_at_treatment`.
    pub area_at_treatment: Decimal,
    /// Sum of `total_billable`.
    pub total_billable: Decimal,
    /// Sum of `reimbursed_amount`.
    pub reimbursed_amount: Decimal,
    /// Sum of `cost_amount`.
    pub cost_amount: Decimal,
    /// Sum of `billing_fee_amount`.
    pub billing_fee_amount: Decimal,
    /// Sum of `gross_profit`.
    pub gross_profit: Decimal,
    /// Sum of `net_profit`.
    pub net_profit: Decimal,
}

impl AddAssign<&ProgressionRow> for ProgressionTotals {
    fn add_assign(&mut self, row: &ProgressionRow) {
        self.area_at_treatment += row.area_at_treatment;
        self.total_billable += row.total_billable;
        self.reimbursed_amount += row.reimbursed_amount;
        self.cost_amount += row.cost_amount;
        self.billing_fee_amount += row.billing_fee_amount;
        self.gross_profit += row.gross_profit;
        self.net_profit += row.net_profit;
    }
}

impl<'a> FromIterator<&'a ProgressionRow> for ProgressionTotals {
    fn from_iter<I: IntoIterator<Item = &'a ProgressionRow>>(rows: I) -> Self {
        let mut totals = Self::default();
        for row in rows {
            totals += row;
        }
        totals
    }
}

impl ProgressionTotals {
    /// Net profit as a percentage of the billable amount, rounded to 2 places.
    ///
    /// Zero when nothing was billed.
    pub fn net_margin_percent(&self) -> Decimal {
        if self.total_billable.is_zero() {
            Decimal::ZERO
        } else {
            (self.net_profit / self.total_billable * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }
}

/// A complete progression: what was asked and what was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// The product every treatment uses.
    pub product: GraftProduct,
    /// The parameters of the run.
    pub input: ProgressionInput,
    /// One row per treatment, in order.
    pub rows: Vec<ProgressionRow>,
    /// Sums across all rows.
    pub totals: ProgressionTotals,
}
