//! Filter diagnostics endpoint

use std::collections::BTreeMap;

use axum::{extract::State, response::Response};
use serde::Serialize;

use super::{json_response, ApiError};
use crate::flights::{run_filter_checks, FilterCheck};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FilterChecksResponse {
    pub success: bool,
    pub total_flights: usize,
    pub test_results: BTreeMap<String, FilterCheck>,
}

/// GET /api/debug/filters
///
/// Runs a fixed set of filter combinations against the loaded data.
pub async fn debug_filters(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(&FilterChecksResponse {
        success: true,
        total_flights: state.store.len(),
        test_results: run_filter_checks(state.store.records()),
    })
}
