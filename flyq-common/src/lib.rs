//! # flyq Common Library
//!
//! Shared code for the flyq flight search service including:
//! - Flight record model and price parsing
//! - Airport code to city name resolution
//! - API response envelope types
//! - Configuration loading

pub mod api;
pub mod config;
pub mod error;
pub mod flight;

pub use error::{Error, Result};
pub use flight::{parse_price, resolve_city, FlightRecord, PriceError};
