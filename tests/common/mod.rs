//! Shared test fixtures for integration tests.

use chrono::NaiveDate;
use maint_opt::model::{ConsumptionRecord, Facility};
use maint_opt::sched::SearchParams;

/// Month used by all fixture records.
pub const MONTH: u32 = 6;

/// Builds a facility with one record per value, on consecutive June 2024
/// dates starting at the 1st.
pub fn facility(id: u32, name: &str, kwh: &[f64]) -> Facility {
    let mut f = Facility::new(id, name);
    for (i, &k) in kwh.iter().enumerate() {
        f.records.push(ConsumptionRecord {
            date: NaiveDate::from_ymd_opt(2024, MONTH, i as u32 + 1).unwrap(),
            kwh: k,
        });
    }
    f
}

/// Default search parameters (7-day window, penalty 5).
pub fn default_params() -> SearchParams {
    SearchParams::default()
}

/// The flat two-facility scenario: an expensive plant at 10 kWh/day and a
/// cheap one at 1 kWh/day, both covering the full week.
pub fn flat_pair() -> Vec<Facility> {
    vec![
        facility(1, "Plant A", &[10.0; 7]),
        facility(2, "Plant B", &[1.0; 7]),
    ]
}
