//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes driving the filter session
//! - The catalog-backed filter lookup
//! - JSON error responses

pub mod error;
pub mod lookup;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use deptboard_core::lookup::FilterLookup;
use deptboard_core::session::FilterSession;

pub use error::ApiError;
pub use lookup::CatalogLookup;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The filter session. Locked only for the duration of a single transition.
    pub session: Arc<Mutex<FilterSession>>,
    /// Source of the per-site option universe.
    pub lookup: Arc<dyn FilterLookup>,
    /// Upper bound for a single lookup.
    pub lookup_timeout: Duration,
}

impl AppState {
    /// Creates the state from a session and a lookup.
    pub fn new(
        session: FilterSession,
        lookup: Arc<dyn FilterLookup>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            lookup,
            lookup_timeout,
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
