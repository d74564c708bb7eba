//! flyq-api library - flight search service
//!
//! Serves search, lookup, statistics and mock booking over a flight dataset
//! loaded into memory at startup.

use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod flights;
pub mod store;

use store::RecordStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Flight records (read-only after startup)
    pub store: Arc<RecordStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let flights = Router::new()
        .route("/api/flights", get(api::list_flights))
        .route("/api/flights/search", get(api::search_flights))
        .route("/api/flights/stats", get(api::flight_stats))
        .route("/api/flights/:flight_number", get(api::get_flight))
        .route("/api/airlines", get(api::list_airlines))
        .route("/api/cities", get(api::list_cities))
        .route("/api/book-flight", post(api::book_flight))
        .route("/api/debug/filters", get(api::debug_filters));

    let service = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(flights)
        .merge(service)
        .fallback(api::not_found)
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
