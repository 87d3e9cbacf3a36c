//! Facility and consumption-record domain types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One daily energy observation for a facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Energy consumed that day (kWh, non-negative).
    pub kwh: f64,
}

/// A maintained installation whose energy consumption is tracked daily.
///
/// Immutable for the duration of a computation. The record collection has
/// no guaranteed ordering; callers that need a date window must sort first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use maint_opt::model::{ConsumptionRecord, Facility};
///
/// let mut plant = Facility::new(1, "Plant 01");
/// plant.records.push(ConsumptionRecord {
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     kwh: 118.5,
/// });
/// assert_eq!(plant.records_in_month(6).len(), 1);
/// assert!(plant.records_in_month(7).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Stable unique identifier.
    pub id: u32,
    /// Display label.
    pub name: String,
    /// Daily observations, in no guaranteed order.
    pub records: Vec<ConsumptionRecord>,
}

impl Facility {
    /// Creates a facility with an empty record collection.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Returns the records whose date falls in `month` (1-12), any year.
    ///
    /// Order follows the underlying record collection, which is
    /// unspecified.
    pub fn records_in_month(&self, month: u32) -> Vec<ConsumptionRecord> {
        self.records
            .iter()
            .copied()
            .filter(|r| r.date.month() == month)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn records_in_month_filters_by_month_only() {
        let mut f = Facility::new(7, "Plant 07");
        f.records.push(ConsumptionRecord {
            date: date(2023, 6, 10),
            kwh: 10.0,
        });
        f.records.push(ConsumptionRecord {
            date: date(2024, 6, 2),
            kwh: 20.0,
        });
        f.records.push(ConsumptionRecord {
            date: date(2024, 7, 2),
            kwh: 30.0,
        });

        // Month filter ignores the year
        let june = f.records_in_month(6);
        assert_eq!(june.len(), 2);
        assert!(june.iter().all(|r| r.date.month() == 6));
    }

    #[test]
    fn records_in_month_empty_for_unmatched_month() {
        let f = Facility::new(1, "Plant 01");
        assert!(f.records_in_month(3).is_empty());
    }
}
