//! Flight search filters
//!
//! A search is a conjunction of optional predicates. Absent or empty
//! parameters impose no constraint, so the result is always an ordered
//! subsequence of the input.

use flyq_common::{parse_price, FlightRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search parameters as received on `/api/flights/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlightQuery {
    /// Free text matched against flight number, airline and city names
    pub q: Option<String>,

    /// Exact origin airport code
    pub origin: Option<String>,

    /// Exact destination airport code
    pub destination: Option<String>,

    /// Exact airline name
    pub airline: Option<String>,

    /// Upper price bound, currency formatting allowed (`₹4,000`)
    pub max_price: Option<String>,
}

impl FlightQuery {
    /// Build from raw `key=value` pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut query.q,
                "origin" => &mut query.origin,
                "destination" => &mut query.destination,
                "airline" => &mut query.airline,
                "max_price" => &mut query.max_price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Prepare the predicates once per request
    pub fn compile(&self) -> FlightFilter<'_> {
        let max_price = supplied(&self.max_price).and_then(|raw| match parse_price(raw) {
            Ok(amount) => Some(amount),
            Err(e) => {
                debug!("Ignoring max_price filter: {}", e);
                None
            }
        });

        FlightFilter {
            needle: supplied(&self.q).map(str::to_lowercase),
            origin: supplied(&self.origin),
            destination: supplied(&self.destination),
            airline: supplied(&self.airline),
            max_price,
        }
    }

    /// Short `key=value` rendering of the supplied parameters
    pub fn describe(&self) -> String {
        [
            ("q", &self.q),
            ("origin", &self.origin),
            ("destination", &self.destination),
            ("airline", &self.airline),
            ("max_price", &self.max_price),
        ]
        .into_iter()
        .filter_map(|(key, value)| supplied(value).map(|v| format!("{}={}", key, v)))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn supplied(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

/// Compiled predicates for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightFilter<'q> {
    needle: Option<String>,
    origin: Option<&'q str>,
    destination: Option<&'q str>,
    airline: Option<&'q str>,
    max_price: Option<i64>,
}

impl FlightFilter<'_> {
    /// True when the record satisfies every supplied predicate
    pub fn matches(&self, record: &FlightRecord) -> bool {
        self.matches_text(record)
            && self.origin.map_or(true, |origin| record.origin == origin)
            && self
                .destination
                .map_or(true, |destination| record.destination == destination)
            && self.airline.map_or(true, |airline| record.airline == airline)
            && self.matches_price(record)
    }

    /// Case-insensitive substring of flight number, airline, or either city name
    fn matches_text(&self, record: &FlightRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        [
            record.flight_number.as_str(),
            record.airline.as_str(),
            record.origin_city(),
            record.destination_city(),
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    /// Unparsable record prices never satisfy a price bound
    fn matches_price(&self, record: &FlightRecord) -> bool {
        match self.max_price {
            None => true,
            Some(max) => record.price_amount().map_or(false, |price| price <= max),
        }
    }
}

/// Records satisfying every supplied filter, in store order
pub fn search<'a>(records: &'a [FlightRecord], query: &FlightQuery) -> Vec<&'a FlightRecord> {
    let filter = query.compile();
    let matched: Vec<_> = records.iter().filter(|r| filter.matches(r)).collect();
    debug!(
        "Search [{}]: {} of {} flights",
        query.describe(),
        matched.len(),
        records.len()
    );
    matched
}
