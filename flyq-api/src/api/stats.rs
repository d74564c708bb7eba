//! Aggregate statistics endpoint

use axum::{extract::State, response::Response};
use serde::Serialize;

use super::{json_response, ApiError};
use crate::flights::{aggregate, FlightStats};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: FlightStats,
}

/// GET /api/flights/stats
///
/// Counts by airline, route and price range over the whole store.
pub async fn flight_stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(&StatsResponse {
        success: true,
        stats: aggregate(state.store.records()),
    })
}
