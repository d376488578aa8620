//! CSV rendering of progression estimates.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use healwise_shared::types::format_area;

use super::{ReportError, ReportRenderer};
use crate::progression::{ProgressionRow, ProgressionTotals};

const HEADER: &str = "Treatment,Area (sq cm),Unit Price,Total Billable,Reimbursed,Cost,Billing Fee,Gross Profit,Net Profit";

/// Renders a progression as comma-separated values.
///
/// Areas are shown with one decimal place and amounts with two, without
/// currency symbols or thousands separators so spreadsheets read them as
/// numbers. The last line holds the totals; its unit price cell is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportRenderer;

impl CsvReportRenderer {
    /// Creates a CSV renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportRenderer for CsvReportRenderer {
    type Output = String;

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn render(
        &self,
        rows: &[ProgressionRow],
        totals: &ProgressionTotals,
    ) -> Result<String, ReportError> {
        if rows.is_empty() {
            return Err(ReportError::NoRows);
        }

        let mut out = String::new();
        writeln!(out, "{HEADER}")?;

        for row in rows {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                row.treatment_index,
                format_area(row.display_area),
                amount(row.unit_price),
                amount(row.total_billable),
                amount(row.reimbursed_amount),
                amount(row.cost_amount),
                amount(row.billing_fee_amount),
                amount(row.gross_profit),
                amount(row.net_profit),
            )?;
        }

        writeln!(
            out,
            "Total,{},,{},{},{},{},{},{}",
            format_area(totals.area_at_treatment),
            amount(totals.total_billable),
            amount(totals.reimbursed_amount),
            amount(totals.cost_amount),
            amount(totals.billing_fee_amount),
            amount(totals.gross_profit),
            amount(totals.net_profit),
        )?;

        Ok(out)
    }
}

fn amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
