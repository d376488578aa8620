//! Healwise API Server
//!
//! Main entry point for the Healwise backend service.

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healwise_api::{AppState, create_router};
use healwise_core::pricing::{PriceTable, PricingError};
use healwise_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healwise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Load and validate the price table; refuse to start on any violation
    let price_table = match PriceTable::load(&config.pricing.table_path)
        .and_then(PriceTable::into_validated)
    {
        Ok(table) => table,
        Err(PricingError::Invalid(errors)) => {
            for message in &errors {
                error!(%message, "Invalid price table entry");
            }
            anyhow::bail!(
                "price table {} has {} error(s)",
                config.pricing.table_path,
                errors.len()
            );
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        path = %config.pricing.table_path,
        quarter = %price_table.active_quarter,
        products = price_table.active_products().len(),
        "Price table loaded"
    );

    // Create router
    let app = create_router(AppState::new(price_table));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
