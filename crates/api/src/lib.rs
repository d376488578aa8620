//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the graft price table and the revenue calculator
//! - The JSON error envelope shared by every handler

pub mod error;
pub mod extract;
pub mod routes;

use axum::Router;
use healwise_core::pricing::PriceTable;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validated price table, loaded once at startup and never mutated.
    pub price_table: Arc<PriceTable>,
}

impl AppState {
    /// Creates application state around a validated price table.
    pub fn new(price_table: PriceTable) -> Self {
        Self {
            price_table: Arc::new(price_table),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
