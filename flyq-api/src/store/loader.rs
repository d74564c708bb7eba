//! CSV parsing for the flight dataset
//!
//! Rows are mapped column-by-column through [`FlightRecord::set_column`], so
//! any column beyond the required ones is carried through untouched.

use std::io;

use csv::{ReaderBuilder, StringRecord, Trim};
use flyq_common::FlightRecord;
use tracing::debug;

use super::LoadError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse flight records from CSV with a header row
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<FlightRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BYTE_ORDER_MARK).to_string())
        .collect();

    for column in FlightRecord::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        records.push(record_from_row(&headers, &row?));
    }

    debug!("Parsed {} rows with columns {:?}", records.len(), headers);
    Ok(records)
}

/// Short rows leave the trailing columns blank
fn record_from_row(headers: &[String], row: &StringRecord) -> FlightRecord {
    let mut record = FlightRecord::default();
    for (index, column) in headers.iter().enumerate() {
        record.set_column(column, row.get(index).unwrap_or_default());
    }
    record
}
