//! Graft price table routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppState, error::ApiError};
use healwise_core::pricing::GraftProduct;
use healwise_shared::{AppError, types::format_currency};

/// Creates the price table routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/manufacturers", get(list_manufacturers))
        .route("/products/{billing_code}", get(get_product))
        .route("/quarters", get(list_quarters))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Restrict the list to one manufacturer.
    pub manufacturer: Option<String>,
}

/// One product with its price formatted for display.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// The product as configured.
    #[serde(flatten)]
    pub product: GraftProduct,
    /// Unit price formatted as currency.
    pub unit_price_display: String,
}

impl From<&GraftProduct> for ProductResponse {
    fn from(product: &GraftProduct) -> Self {
        Self {
            product: product.clone(),
            unit_price_display: format_currency(product.unit_price),
        }
    }
}

/// Active products of the quarter in effect.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    /// Pricing quarter label.
    pub quarter: String,
    /// Active products in table order.
    pub products: Vec<ProductResponse>,
}

/// Summary of one pricing quarter.
#[derive(Debug, Serialize)]
pub struct QuarterResponse {
    /// Quarter label.
    pub label: String,
    /// Whether this quarter is used for calculations.
    pub active: bool,
    /// Number of products listed in the quarter, discontinued included.
    pub product_count: usize,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /products
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Json<ProductListResponse> {
    let table = &state.price_table;
    let products = match query.manufacturer.as_deref() {
        Some(manufacturer) => table.products_for(manufacturer),
        None => table.active_products(),
    };
    debug!(count = products.len(), "Listing active products");

    Json(ProductListResponse {
        quarter: table.active_quarter.clone(),
        products: products.into_iter().map(ProductResponse::from).collect(),
    })
}

/// GET /products/manufacturers
async fn list_manufacturers(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .price_table
            .manufacturers()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// GET /products/{billing_code}
async fn get_product(
    State(state): State<AppState>,
    Path(billing_code): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    state
        .price_table
        .find_by_billing_code(&billing_code)
        .map(|product| Json(ProductResponse::from(product)))
        .ok_or_else(|| {
            AppError::NotFound(format!("No active product with billing code {billing_code}"))
                .into()
        })
}

/// GET /quarters
async fn list_quarters(State(state): State<AppState>) -> Json<Vec<QuarterResponse>> {
    let table = &state.price_table;
    Json(
        table
            .quarters
            .iter()
            .map(|q| QuarterResponse {
                label: q.label.clone(),
                active: q.label == table.active_quarter,
                product_count: q.products.len(),
            })
            .collect(),
    )
}
