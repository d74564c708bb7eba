//! Mock booking endpoint

use axum::{body::Bytes, extract::State, response::Response};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{json_response, ApiError};
use crate::flights::{book, FlightView};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub flight_number: Option<String>,
}

impl BookRequest {
    /// A body that is not a JSON object with a string `flight_number`
    /// counts as having no flight number
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            warn!("Unreadable booking request body: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse<'a> {
    pub success: bool,
    pub booking_id: String,
    pub flight: FlightView<'a>,
    pub message: String,
}

/// POST /api/book-flight
///
/// Body: `{"flight_number": "6E101"}`. Returns 400 without a flight number
/// and 404 for an unknown one. No booking is stored.
pub async fn book_flight(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = BookRequest::parse(&body);
    let booking = book(&state.store, request.flight_number.as_deref(), &Local::now())?;

    info!(
        "Booked flight {} as {}",
        booking.flight.flight_number, booking.booking_id
    );

    json_response(&BookingResponse {
        success: true,
        booking_id: booking.booking_id,
        flight: FlightView::new(booking.flight),
        message: booking.message,
    })
}
