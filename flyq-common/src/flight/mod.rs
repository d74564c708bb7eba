//! Flight domain model shared by the service and its tests
//!
//! - [`FlightRecord`]: one row of the flight dataset
//! - [`parse_price`]: the single currency-string parser used everywhere
//! - [`resolve_city`]: airport code to display name

pub mod city;
pub mod price;
pub mod record;

pub use city::resolve_city;
pub use price::{parse_price, PriceError};
pub use record::{present, FlightRecord};
