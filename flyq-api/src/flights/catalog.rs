//! Distinct airlines and cities present in the data

use std::collections::BTreeSet;

use flyq_common::flight::{present, resolve_city};
use flyq_common::FlightRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// Unique airline names, sorted
pub fn airlines(records: &[FlightRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| present(&record.airline))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every origin or destination code, sorted by code
pub fn cities(records: &[FlightRecord]) -> Vec<City<'_>> {
    records
        .iter()
        .flat_map(|record| [record.origin.as_str(), record.destination.as_str()])
        .filter_map(present)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|code| City {
            code,
            name: resolve_city(code),
        })
        .collect()
}
