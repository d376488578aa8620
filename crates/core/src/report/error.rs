//! Report rendering error types.

use thiserror::Error;

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// There are no rows to render.
    #[error("Progression has no rows to render")]
    NoRows,

    /// Writing the document failed.
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}
