//! Flight search, aggregation and booking over the record store
//!
//! Everything here is a pure function of the records it is given; nothing
//! writes back into the store.

pub mod booking;
pub mod catalog;
pub mod diagnostics;
pub mod query;
pub mod stats;
pub mod view;

pub use booking::{book, Booking, BookingError};
pub use catalog::{airlines, cities, City};
pub use diagnostics::{run_filter_checks, FilterCheck};
pub use query::{search, FlightFilter, FlightQuery};
pub use stats::{aggregate, FlightStats, PriceBucket, PriceRanges};
pub use view::FlightView;
