//! Flight listing, lookup and search endpoints

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
};
use serde::Serialize;
use tracing::{debug, info};

use super::{json_response, ApiError};
use crate::flights::{search, FlightQuery, FlightView};
use crate::AppState;

/// List/search response
#[derive(Debug, Serialize)]
pub struct FlightListResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub flights: Vec<FlightView<'a>>,
}

impl<'a> FlightListResponse<'a> {
    fn new(flights: Vec<FlightView<'a>>) -> Self {
        Self {
            success: true,
            count: flights.len(),
            flights,
        }
    }
}

/// Single flight response
#[derive(Debug, Serialize)]
pub struct FlightResponse<'a> {
    pub success: bool,
    pub flight: FlightView<'a>,
}

/// GET /api/flights
///
/// Every flight in load order, with city names.
pub async fn list_flights(State(state): State<AppState>) -> Result<Response, ApiError> {
    let flights = FlightView::project(state.store.records());
    json_response(&FlightListResponse::new(flights))
}

/// GET /api/flights/search?q=&origin=&destination=&airline=&max_price=
///
/// All supplied filters must match. Empty parameters are ignored, an
/// unparsable `max_price` is dropped and a repeated parameter keeps its
/// first value.
pub async fn search_flights(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = params?;
    let query = FlightQuery::from_pairs(pairs);
    info!("Search request: [{}]", query.describe());

    let matched = search(state.store.records(), &query);
    debug!("Search returned {} flights", matched.len());

    json_response(&FlightListResponse::new(FlightView::project(matched)))
}

/// GET /api/flights/:flight_number
pub async fn get_flight(
    State(state): State<AppState>,
    flight_number: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(flight_number) = flight_number?;
    let record = state
        .store
        .find(&flight_number)
        .ok_or_else(|| ApiError::NotFound("Flight not found".to_string()))?;

    json_response(&FlightResponse {
        success: true,
        flight: FlightView::new(record),
    })
}
