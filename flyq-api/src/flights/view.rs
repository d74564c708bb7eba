//! Response projection of a flight record

use flyq_common::FlightRecord;
use serde::Serialize;

/// A stored record plus its resolved city names.
///
/// Built fresh for every response; the record itself is only borrowed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlightView<'a> {
    #[serde(flatten)]
    pub record: &'a FlightRecord,
    pub origin_city: &'a str,
    pub destination_city: &'a str,
}

impl<'a> FlightView<'a> {
    pub fn new(record: &'a FlightRecord) -> Self {
        Self {
            record,
            origin_city: record.origin_city(),
            destination_city: record.destination_city(),
        }
    }

    /// Project a sequence of records, keeping order
    pub fn project<I>(records: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a FlightRecord>,
    {
        records.into_iter().map(Self::new).collect()
    }
}

impl<'a> From<&'a FlightRecord> for FlightView<'a> {
    fn from(record: &'a FlightRecord) -> Self {
        Self::new(record)
    }
}
