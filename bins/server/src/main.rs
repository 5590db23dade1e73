//! Deptboard API Server
//!
//! Main entry point for the report filter service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deptboard_api::{AppState, CatalogLookup, create_router};
use deptboard_core::filters::FilterStore;
use deptboard_core::session::FilterSession;
use deptboard_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deptboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Load the site catalog
    let lookup = CatalogLookup::load(&config.lookup.catalog_path).await?;
    info!(
        catalog = %config.lookup.catalog_path,
        timeout_ms = config.lookup.timeout_ms,
        "Lookup configured"
    );

    // Create filter session
    let today = chrono::Local::now().date_naive();
    let store = FilterStore::with_policy(config.filters.default_range, today);
    info!(default_range = ?config.filters.default_range, "Filter store ready");

    // Create application state
    let state = AppState::new(
        FilterSession::new(store),
        Arc::new(lookup),
        Duration::from_millis(config.lookup.timeout_ms),
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
