//! Flight record model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::city::resolve_city;
use super::price::{parse_price, PriceError};

/// One flight from the source dataset.
///
/// Known columns are typed fields; every other source column is kept in
/// `extra` and serialized alongside them under its original name. An empty
/// string means the column was blank in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "FlightNumber", default)]
    pub flight_number: String,

    #[serde(rename = "Airline", default)]
    pub airline: String,

    /// Origin airport code
    #[serde(rename = "Origin", default)]
    pub origin: String,

    /// Destination airport code
    #[serde(rename = "Destination", default)]
    pub destination: String,

    /// Price as displayed in the source, e.g. `₹3,500`
    #[serde(rename = "Price", default)]
    pub price: String,

    /// Pass-through columns (DepartureTime, ArrivalTime, Duration, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FlightRecord {
    /// Source column names of the typed fields
    pub const FLIGHT_NUMBER: &'static str = "FlightNumber";
    pub const AIRLINE: &'static str = "Airline";
    pub const ORIGIN: &'static str = "Origin";
    pub const DESTINATION: &'static str = "Destination";
    pub const PRICE: &'static str = "Price";

    /// Columns every source must provide
    pub const REQUIRED_COLUMNS: [&'static str; 5] = [
        Self::FLIGHT_NUMBER,
        Self::AIRLINE,
        Self::ORIGIN,
        Self::DESTINATION,
        Self::PRICE,
    ];

    pub fn new(
        flight_number: impl Into<String>,
        airline: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            airline: airline.into(),
            origin: origin.into(),
            destination: destination.into(),
            price: price.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Names added to every response; source columns with these names are dropped
    pub const DERIVED_COLUMNS: [&'static str; 2] = ["origin_city", "destination_city"];

    /// Attach a column by name, same rules as [`FlightRecord::set_column`]
    pub fn with_extra(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set_column(column, value);
        self
    }

    /// Assign a value by source column name; unknown columns go to `extra`
    pub fn set_column(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match column {
            Self::FLIGHT_NUMBER => self.flight_number = value,
            Self::AIRLINE => self.airline = value,
            Self::ORIGIN => self.origin = value,
            Self::DESTINATION => self.destination = value,
            Self::PRICE => self.price = value,
            derived if Self::DERIVED_COLUMNS.contains(&derived) => {
                debug!("Dropping source column {:?}, name is reserved", derived);
            }
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }

    /// Parsed price amount
    pub fn price_amount(&self) -> Result<i64, PriceError> {
        parse_price(&self.price)
    }

    pub fn origin_city(&self) -> &str {
        resolve_city(&self.origin)
    }

    pub fn destination_city(&self) -> &str {
        resolve_city(&self.destination)
    }

    /// Route label, e.g. `Bangalore → Mumbai`
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin_city(), self.destination_city())
    }
}

/// `Some(value)` when the field was not blank in the source
pub fn present(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
