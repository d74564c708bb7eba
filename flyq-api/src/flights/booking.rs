//! Mock booking
//!
//! A booking only confirms that the flight exists and hands back an
//! identifier derived from the clock. Nothing is stored.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use flyq_common::FlightRecord;
use thiserror::Error;

use crate::store::RecordStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Flight number is required")]
    MissingFlightNumber,

    #[error("Flight not found")]
    NotFound(String),
}

/// Confirmation for a booked flight
#[derive(Debug, Clone)]
pub struct Booking<'a> {
    pub booking_id: String,
    pub flight: &'a FlightRecord,
    pub message: String,
}

/// `BK` followed by the compact local date and time, e.g. `BK20240115143022`
pub fn booking_id<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("BK{}", at.format("%Y%m%d%H%M%S"))
}

/// Confirm a booking for the first flight with the given number
pub fn book<'a, Tz>(
    store: &'a RecordStore,
    flight_number: Option<&str>,
    at: &DateTime<Tz>,
) -> Result<Booking<'a>, BookingError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let flight_number = flight_number
        .filter(|number| !number.is_empty())
        .ok_or(BookingError::MissingFlightNumber)?;

    let flight = store
        .find(flight_number)
        .ok_or_else(|| BookingError::NotFound(flight_number.to_string()))?;

    Ok(Booking {
        booking_id: booking_id(at),
        flight,
        message: format!("Flight {} booked successfully!", flight_number),
    })
}
