//! Grouped counts over a set of flights

use std::collections::BTreeMap;

use flyq_common::FlightRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::warn;

/// Fixed price ranges, lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    Under3000,
    From3000To4000,
    From4000To5000,
    Above5000,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Under3000,
        PriceBucket::From3000To4000,
        PriceBucket::From4000To5000,
        PriceBucket::Above5000,
    ];

    pub fn for_amount(amount: i64) -> Self {
        match amount {
            i64::MIN..=2_999 => PriceBucket::Under3000,
            3_000..=3_999 => PriceBucket::From3000To4000,
            4_000..=4_999 => PriceBucket::From4000To5000,
            _ => PriceBucket::Above5000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Under3000 => "Under ₹3,000",
            PriceBucket::From3000To4000 => "₹3,000 - ₹4,000",
            PriceBucket::From4000To5000 => "₹4,000 - ₹5,000",
            PriceBucket::Above5000 => "Above ₹5,000",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-bucket counts; serialized as `{label: count}` in bucket order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRanges {
    counts: [usize; 4],
}

impl PriceRanges {
    pub fn add(&mut self, bucket: PriceBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn count(&self, bucket: PriceBucket) -> usize {
        self.counts[bucket.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for PriceRanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PriceBucket::ALL.len()))?;
        for bucket in PriceBucket::ALL {
            map.serialize_entry(bucket.label(), &self.count(bucket))?;
        }
        map.end()
    }
}

/// Body of `/api/flights/stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlightStats {
    pub total_flights: usize,
    pub airlines: BTreeMap<String, usize>,
    pub routes: BTreeMap<String, usize>,
    pub price_ranges: PriceRanges,
    /// Flights left out of `price_ranges` because their price did not parse
    pub unpriced_flights: usize,
}

/// Count flights by airline, route and price bucket in one pass
pub fn aggregate<'a, I>(records: I) -> FlightStats
where
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut stats = FlightStats::default();

    for record in records {
        stats.total_flights += 1;
        *stats.airlines.entry(record.airline.clone()).or_default() += 1;
        *stats.routes.entry(record.route_label()).or_default() += 1;

        match record.price_amount() {
            Ok(amount) => stats.price_ranges.add(PriceBucket::for_amount(amount)),
            Err(e) => {
                warn!(
                    "Flight {:?} left out of price ranges: {}",
                    record.flight_number, e
                );
                stats.unpriced_flights += 1;
            }
        }
    }

    stats
}
