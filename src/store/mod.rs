//! Facility and consumption-record loading.
//!
//! The planner itself works on in-memory [`Facility`] values; this module
//! is the data-access side that produces them, either from a CSV file of
//! daily readings or from the seeded synthetic generator.

pub mod synthetic;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{ConsumptionRecord, Facility};

/// One row of the input CSV: `facility_id,facility_name,date,kwh`.
#[derive(Debug, Deserialize)]
struct RawRow {
    facility_id: u32,
    facility_name: String,
    date: NaiveDate,
    kwh: f64,
}

/// Loading error: CSV/IO failure or a rejected row.
#[derive(Debug)]
pub enum StoreError {
    /// CSV parsing or underlying IO failure.
    Csv(csv::Error),
    /// A row carried a negative kwh amount.
    NegativeAmount {
        /// Facility the offending row belongs to.
        facility_id: u32,
        /// Date of the offending row.
        date: NaiveDate,
        /// The rejected value.
        kwh: f64,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(e) => write!(f, "cannot read records: {e}"),
            Self::NegativeAmount {
                facility_id,
                date,
                kwh,
            } => write!(
                f,
                "facility {facility_id} has a negative amount {kwh} on {date}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::NegativeAmount { .. } => None,
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Loads facilities from a CSV file at the given path.
///
/// # Errors
///
/// Returns a [`StoreError`] if the file cannot be read, a row fails to
/// parse, or a row carries a negative amount.
pub fn load_csv_file(path: &Path) -> Result<Vec<Facility>, StoreError> {
    let rdr = csv::ReaderBuilder::new().from_path(path)?;
    collect_facilities(rdr)
}

/// Loads facilities from any CSV reader.
///
/// Rows are grouped by `facility_id`; facilities appear in the order their
/// first row appears, and a facility's display name is taken from that
/// first row. Row order within a facility is preserved as-is (record
/// collections carry no ordering guarantee).
///
/// # Errors
///
/// Returns a [`StoreError`] if a row fails to parse or carries a negative
/// amount.
pub fn read_csv(reader: impl io::Read) -> Result<Vec<Facility>, StoreError> {
    let rdr = csv::ReaderBuilder::new().from_reader(reader);
    collect_facilities(rdr)
}

fn collect_facilities<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Facility>, StoreError> {
    let mut facilities: Vec<Facility> = Vec::new();

    for row in rdr.deserialize() {
        let row: RawRow = row?;
        if row.kwh < 0.0 {
            return Err(StoreError::NegativeAmount {
                facility_id: row.facility_id,
                date: row.date,
                kwh: row.kwh,
            });
        }

        let idx = match facilities.iter().position(|f| f.id == row.facility_id) {
            Some(i) => i,
            None => {
                facilities.push(Facility::new(row.facility_id, row.facility_name));
                facilities.len() - 1
            }
        };
        facilities[idx].records.push(ConsumptionRecord {
            date: row.date,
            kwh: row.kwh,
        });
    }

    Ok(facilities)
}
