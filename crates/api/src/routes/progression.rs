//! Revenue progression calculator routes.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AppState, error::ApiError, extract::AppJson};
use healwise_core::{
    pricing::{GraftProduct, PriceTable},
    progression::{
        Progression, ProgressionEngine, ProgressionError, ProgressionInput, ProgressionRow,
        ProgressionTotals,
    },
    report::{CsvReportRenderer, ReportRenderer},
};
use healwise_shared::{
    AppError,
    types::{format_area, format_currency, format_percent},
};

/// Creates the calculator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/progression/calculate", post(calculate))
        .route("/progression/export", post(export_csv))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a progression.
///
/// Decimals may be sent as strings (preferred, exact) or JSON numbers.
#[derive(Debug, Deserialize)]
pub struct ProgressionRequest {
    /// Manufacturer of the selected product. Narrows the lookup when given
    /// together with `product_name`.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Name of the selected product.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Billing code of the selected product, with or without quarter suffix.
    #[serde(default)]
    pub billing_code: Option<String>,
    /// Wound area at the first treatment, square centimeters.
    pub initial_area: Decimal,
    /// Number of treatments (1-10).
    pub treatment_count: u32,
    /// Percentage of area closed per treatment.
    pub closure_rate_percent: Decimal,
    /// Practice billing fee percentage.
    pub billing_fee_percent: Decimal,
}

impl ProgressionRequest {
    fn input(&self) -> ProgressionInput {
        ProgressionInput {
            initial_area: self.initial_area,
            treatment_count: self.treatment_count,
            closure_rate_percent: self.closure_rate_percent,
            billing_fee_percent: self.billing_fee_percent,
        }
    }
}

/// Display strings for one row.
#[derive(Debug, Serialize)]
pub struct RowDisplay {
    /// Area, one decimal place.
    pub area: String,
    /// Total billable.
    pub total_billable: String,
    /// Reimbursed amount.
    pub reimbursed_amount: String,
    /// Cost amount.
    pub cost_amount: String,
    /// Billing fee.
    pub billing_fee_amount: String,
    /// Gross profit.
    pub gross_profit: String,
    /// Net profit.
    pub net_profit: String,
}

/// One row with exact values and display strings.
#[derive(Debug, Serialize)]
pub struct RowResponse {
    /// Exact values.
    #[serde(flatten)]
    pub row: ProgressionRow,
    /// Formatted values.
    pub display: RowDisplay,
}

/// Totals with exact values and display strings.
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    /// Exact sums.
    #[serde(flatten)]
    pub totals: ProgressionTotals,
    /// Formatted sums.
    pub display: RowDisplay,
    /// Net profit over billable, percent.
    pub net_margin_percent: String,
}

/// Response for a progression.
#[derive(Debug, Serialize)]
pub struct ProgressionResponse {
    /// Pricing quarter the product price came from.
    pub quarter: String,
    /// The selected product.
    pub product: GraftProduct,
    /// The parameters used.
    pub input: ProgressionInput,
    /// One entry per treatment.
    pub rows: Vec<RowResponse>,
    /// Sums across all treatments.
    pub totals: TotalsResponse,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Finds the product a request refers to.
fn resolve_product<'a>(
    table: &'a PriceTable,
    request: &ProgressionRequest,
) -> Result<&'a GraftProduct, ApiError> {
    let Some(billing_code) = request.billing_code.as_deref() else {
        return Err(ProgressionError::MissingProduct.into());
    };

    let product = match (
        request.manufacturer.as_deref(),
        request.product_name.as_deref(),
    ) {
        (Some(manufacturer), Some(product_name)) => {
            table.find(manufacturer, product_name, billing_code)
        }
        _ => table.find_by_billing_code(billing_code),
    };

    product.ok_or_else(|| {
        AppError::NotFound(format!("No active product with billing code {billing_code}")).into()
    })
}

/// Validates a request and runs the progression.
fn run_progression(
    table: &PriceTable,
    request: &ProgressionRequest,
) -> Result<Progression, ApiError> {
    let product = resolve_product(table, request)?;
    let input = request.input();

    ProgressionEngine::check_interactive_limit(&input)
        .and_then(|()| ProgressionEngine::calculate(Some(product), &input))
        .map_err(|e| {
            warn!(error = %e, billing_code = %product.billing_code, "Rejected progression input");
            ApiError::from(e)
        })
        .inspect(|progression| {
            debug!(
                billing_code = %product.billing_code,
                treatments = progression.rows.len(),
                total_billable = %progression.totals.total_billable,
                "Calculated progression"
            );
        })
}

fn display(
    area: Decimal,
    total_billable: Decimal,
    reimbursed_amount: Decimal,
    cost_amount: Decimal,
    billing_fee_amount: Decimal,
    gross_profit: Decimal,
    net_profit: Decimal,
) -> RowDisplay {
    RowDisplay {
        area: format_area(area),
        total_billable: format_currency(total_billable),
        reimbursed_amount: format_currency(reimbursed_amount),
        cost_amount: format_currency(cost_amount),
        billing_fee_amount: format_currency(billing_fee_amount),
        gross_profit: format_currency(gross_profit),
        net_profit: format_currency(net_profit),
    }
}

impl From<ProgressionRow> for RowResponse {
    fn from(row: ProgressionRow) -> Self {
        let display = display(
            row.display_area,
            row.total_billable,
            row.reimbursed_amount,
            row.cost_amount,
            row.billing_fee_amount,
            row.gross_profit,
            row.net_profit,
        );
        Self { row, display }
    }
}

impl From<ProgressionTotals> for TotalsResponse {
    fn from(totals: ProgressionTotals) -> Self {
        let display = display(
            totals.area_at_treatment,
            totals.total_billable,
            totals.reimbursed_amount,
            totals.cost_amount,
            totals.billing_fee_amount,
            totals.gross_profit,
            totals.net_profit,
        );
        let net_margin_percent = format_percent(totals.net_margin_percent());
        Self {
            totals,
            display,
            net_margin_percent,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /progression/calculate
async fn calculate(
    State(state): State<AppState>,
    AppJson(request): AppJson<ProgressionRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    let progression = run_progression(&state.price_table, &request)?;

    Ok(Json(ProgressionResponse {
        quarter: state.price_table.active_quarter.clone(),
        product: progression.product,
        input: progression.input,
        rows: progression.rows.into_iter().map(RowResponse::from).collect(),
        totals: TotalsResponse::from(progression.totals),
    }))
}

/// POST /progression/export
async fn export_csv(
    State(state): State<AppState>,
    AppJson(request): AppJson<ProgressionRequest>,
) -> Result<Response, ApiError> {
    let progression = run_progression(&state.price_table, &request)?;
    let renderer = CsvReportRenderer::new();
    let document = renderer.render(&progression.rows, &progression.totals)?;
    let disposition = format!(
        "attachment; filename=\"progression-{}.csv\"",
        progression.product.base_billing_code()
    );

    Ok((
        [
            (header::CONTENT_TYPE, renderer.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}
