//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod products;
pub mod progression;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(products::routes())
        .merge(progression::routes())
}
