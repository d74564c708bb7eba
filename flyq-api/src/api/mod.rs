//! HTTP API handlers for flyq-api

pub mod booking;
pub mod buildinfo;
pub mod catalog;
pub mod debug;
pub mod error;
pub mod flights;
pub mod health;
pub mod stats;

pub use booking::book_flight;
pub use buildinfo::get_build_info;
pub use catalog::{list_airlines, list_cities};
pub use debug::debug_filters;
pub use error::{handle_panic, not_found, ApiError};
pub use flights::{get_flight, list_flights, search_flights};
pub use health::health_routes;
pub use stats::flight_stats;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Serialize a success body while the borrowed records are still alive.
///
/// Serialization failures surface as an [`ApiError::Internal`] body rather
/// than a plain-text 500.
pub(crate) fn json_response<T: Serialize>(body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
