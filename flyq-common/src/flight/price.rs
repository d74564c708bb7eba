//! Currency string parsing
//!
//! Prices arrive as display strings such as `₹3,500`. Every filter and
//! aggregation path goes through [`parse_price`].

use thiserror::Error;

/// Currency symbols stripped before parsing
const CURRENCY_SYMBOLS: [char; 5] = ['₹', '$', '€', '£', '¥'];

/// Thousands separator
const SEPARATOR: char = ',';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,

    #[error("invalid price: {0:?}")]
    Invalid(String),
}

/// Parse a currency string into a whole amount.
///
/// Strips currency symbols and thousands separators, then parses the
/// remainder as an integer.
///
/// # Examples
///
/// ```
/// use flyq_common::flight::{parse_price, PriceError};
///
/// assert_eq!(parse_price("₹3,500"), Ok(3500));
/// assert_eq!(parse_price("4200"), Ok(4200));
/// assert_eq!(parse_price(""), Err(PriceError::Empty));
/// assert!(parse_price("cheap").is_err());
/// ```
pub fn parse_price(raw: &str) -> Result<i64, PriceError> {
    if raw.trim().is_empty() {
        return Err(PriceError::Empty);
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| *c != SEPARATOR && !CURRENCY_SYMBOLS.contains(c))
        .collect();

    cleaned
        .trim()
        .parse::<i64>()
        .map_err(|_| PriceError::Invalid(raw.to_string()))
}
