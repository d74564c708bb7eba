//! Canned filter combinations for checking search behaviour against live data

use std::collections::BTreeMap;

use flyq_common::FlightRecord;
use serde::Serialize;

use super::query::{search, FlightQuery};

/// Flight numbers reported per check
const SAMPLE_SIZE: usize = 5;

/// Outcome of one canned filter set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCheck {
    pub count: usize,
    pub flights: Vec<String>,
}

fn checks() -> Vec<FlightQuery> {
    let param = |value: &str| Some(value.to_string());

    vec![
        FlightQuery {
            origin: param("BLR"),
            ..Default::default()
        },
        FlightQuery {
            destination: param("BOM"),
            ..Default::default()
        },
        FlightQuery {
            airline: param("IndiGo"),
            ..Default::default()
        },
        FlightQuery {
            origin: param("BLR"),
            destination: param("BOM"),
            ..Default::default()
        },
        FlightQuery {
            airline: param("IndiGo"),
            origin: param("BLR"),
            ..Default::default()
        },
        FlightQuery {
            q: param("indigo"),
            ..Default::default()
        },
        FlightQuery {
            q: param("bangalore"),
            ..Default::default()
        },
    ]
}

/// Run every canned filter set, keyed by its parameter description
pub fn run_filter_checks(records: &[FlightRecord]) -> BTreeMap<String, FilterCheck> {
    checks()
        .into_iter()
        .map(|query| {
            let found = search(records, &query);
            let check = FilterCheck {
                count: found.len(),
                flights: found
                    .iter()
                    .take(SAMPLE_SIZE)
                    .map(|record| record.flight_number.clone())
                    .collect(),
            };
            (query.describe(), check)
        })
        .collect()
}
