//! Per-facility consumption table over the opening days of a month.

use crate::model::Facility;

/// Consumption values for one facility, in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// Facility id this row belongs to.
    pub facility_id: u32,
    /// Daily amounts for the first distinct dates of the month, at most
    /// one per window day. Shorter than the window when the facility's
    /// history is short.
    pub kwh: Vec<f64>,
}

/// Derived, ephemeral consumption table keyed by facility in input order.
///
/// Entry order is the facility input order; the search enumerates
/// candidates in this order, so it is semantically meaningful (first-found
/// tie-break) and must not be rehashed into an unordered map.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTable {
    entries: Vec<TableEntry>,
}

impl WeeklyTable {
    /// Builds the table for `month`.
    ///
    /// Per facility: filter records to the month (any year), sort
    /// ascending by date, keep one value per distinct date, and take at
    /// most the first `window_days` amounts. Facilities with no matching
    /// record get an empty row and stay in the table.
    pub fn build(facilities: &[Facility], month: u32, window_days: usize) -> Self {
        let mut entries = Vec::with_capacity(facilities.len());
        for facility in facilities {
            let mut in_month = facility.records_in_month(month);
            in_month.sort_by_key(|r| r.date);
            in_month.dedup_by_key(|r| r.date);
            let kwh = in_month
                .iter()
                .take(window_days)
                .map(|r| r.kwh)
                .collect();
            entries.push(TableEntry {
                facility_id: facility.id,
                kwh,
            });
        }
        Self { entries }
    }

    /// Rows in facility input order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Whether at least one facility has at least one value.
    pub fn has_records(&self) -> bool {
        self.entries.iter().any(|e| !e.kwh.is_empty())
    }

    /// The consumption of `facility_id` on 1-indexed `day`, if recorded.
    pub fn value(&self, facility_id: u32, day: usize) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.facility_id == facility_id)
            .and_then(|e| day.checked_sub(1).and_then(|i| e.kwh.get(i)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConsumptionRecord;
    use chrono::NaiveDate;

    fn record(day: u32, kwh: f64) -> ConsumptionRecord {
        ConsumptionRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            kwh,
        }
    }

    #[test]
    fn values_are_sorted_by_date_before_windowing() {
        let mut f = Facility::new(1, "Plant 01");
        // Deliberately unsorted input
        f.records.extend([record(5, 50.0), record(1, 10.0), record(3, 30.0)]);
        let table = WeeklyTable::build(&[f], 6, 7);
        assert_eq!(table.entries()[0].kwh, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn window_caps_the_row_length() {
        let mut f = Facility::new(1, "Plant 01");
        for day in 1..=10 {
            f.records.push(record(day, day as f64));
        }
        let table = WeeklyTable::build(&[f], 6, 7);
        assert_eq!(table.entries()[0].kwh.len(), 7);
        assert_eq!(table.entries()[0].kwh[6], 7.0);
    }

    #[test]
    fn duplicate_dates_keep_one_value() {
        let mut f = Facility::new(1, "Plant 01");
        f.records.extend([record(2, 20.0), record(2, 99.0), record(4, 40.0)]);
        let table = WeeklyTable::build(&[f], 6, 7);
        assert_eq!(table.entries()[0].kwh.len(), 2);
    }

    #[test]
    fn facility_without_matching_records_keeps_an_empty_row() {
        let with = {
            let mut f = Facility::new(1, "Plant 01");
            f.records.push(record(1, 10.0));
            f
        };
        let without = Facility::new(2, "Plant 02");
        let table = WeeklyTable::build(&[with, without], 6, 7);
        assert_eq!(table.entries().len(), 2);
        assert!(table.entries()[1].kwh.is_empty());
        assert!(table.has_records());
    }

    #[test]
    fn entry_order_is_input_order() {
        let a = Facility::new(9, "Plant 09");
        let b = Facility::new(1, "Plant 01");
        let table = WeeklyTable::build(&[a, b], 6, 7);
        assert_eq!(table.entries()[0].facility_id, 9);
        assert_eq!(table.entries()[1].facility_id, 1);
    }

    #[test]
    fn value_lookup_is_one_indexed() {
        let mut f = Facility::new(1, "Plant 01");
        f.records.extend([record(1, 10.0), record(2, 20.0)]);
        let table = WeeklyTable::build(&[f], 6, 7);
        assert_eq!(table.value(1, 1), Some(10.0));
        assert_eq!(table.value(1, 2), Some(20.0));
        assert_eq!(table.value(1, 3), None);
        assert_eq!(table.value(42, 1), None);
    }
}
