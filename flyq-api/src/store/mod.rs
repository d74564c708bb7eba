//! In-memory record store
//!
//! Populated once at startup and read-only afterwards. Handlers only ever see
//! `&[FlightRecord]`, so concurrent requests need no locking.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use flyq_common::FlightRecord;
use thiserror::Error;
use tracing::info;

mod loader;

pub use loader::read_records;

/// Errors raised while loading the flight dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Flight data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Insertion-ordered flight records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<FlightRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }

    /// Load every row of a CSV file
    pub fn load_csv(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(file)?;
        info!("Loaded {} flights from {}", store.len(), path.display());
        Ok(store)
    }

    /// Load CSV rows from any reader
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        read_records(reader).map(Self::new)
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given flight number
    pub fn find(&self, flight_number: &str) -> Option<&FlightRecord> {
        self.records
            .iter()
            .find(|record| record.flight_number == flight_number)
    }
}
