//! Rendering of progression estimates into downloadable documents.
//!
//! A renderer receives the computed rows and totals and nothing else;
//! no rendered output ever feeds back into the calculation.

pub mod csv;
pub mod error;

pub use self::csv::CsvReportRenderer;
pub use error::ReportError;

use crate::progression::{ProgressionRow, ProgressionTotals};

/// Turns progression rows and totals into a document.
pub trait ReportRenderer {
    /// Rendered document type.
    type Output;

    /// MIME type of the rendered document.
    fn content_type(&self) -> &'static str;

    /// Renders the rows, in order, followed by the totals.
    fn render(
        &self,
        rows: &[ProgressionRow],
        totals: &ProgressionTotals,
    ) -> Result<Self::Output, ReportError>;
}
