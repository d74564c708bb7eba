//! Airline and city listings

use axum::{extract::State, response::Response};
use serde::Serialize;

use super::{json_response, ApiError};
use crate::flights::{airlines, cities, City};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AirlinesResponse<'a> {
    pub success: bool,
    pub airlines: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse<'a> {
    pub success: bool,
    pub cities: Vec<City<'a>>,
}

/// GET /api/airlines
pub async fn list_airlines(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(&AirlinesResponse {
        success: true,
        airlines: airlines(state.store.records()),
    })
}

/// GET /api/cities
///
/// Codes seen as origin or destination, sorted, with display names.
pub async fn list_cities(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(&CitiesResponse {
        success: true,
        cities: cities(state.store.records()),
    })
}
