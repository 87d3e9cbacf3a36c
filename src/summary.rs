//! Per-facility average daily consumption for a selected month.

use serde::Serialize;

use crate::error::PlanError;
use crate::model::Facility;

/// Average daily consumption of one facility over a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityAverage {
    /// Facility display name.
    pub facility: String,
    /// Arithmetic mean of the matching daily amounts (kWh). Zero when the
    /// facility has no record in the month.
    pub avg_kwh: f64,
}

/// Computes the average daily consumption of every facility for `month`.
///
/// Records are matched on calendar month regardless of year. A facility
/// with no matching record reports an average of 0.0 rather than failing;
/// the output always has one entry per input facility, in input order.
///
/// # Errors
///
/// Returns [`PlanError::MonthOutOfRange`] if `month` is not in 1..=12.
///
/// # Examples
///
/// ```
/// use maint_opt::summary::average_daily_consumption;
///
/// let averages = average_daily_consumption(&[], 6).unwrap();
/// assert!(averages.is_empty());
/// ```
pub fn average_daily_consumption(
    facilities: &[Facility],
    month: u32,
) -> Result<Vec<FacilityAverage>, PlanError> {
    if !(1..=12).contains(&month) {
        return Err(PlanError::MonthOutOfRange(month));
    }

    let mut result = Vec::with_capacity(facilities.len());
    for facility in facilities {
        let matching = facility.records_in_month(month);
        let avg_kwh = if matching.is_empty() {
            0.0
        } else {
            let sum: f64 = matching.iter().map(|r| r.kwh).sum();
            sum / matching.len() as f64
        };
        result.push(FacilityAverage {
            facility: facility.name.clone(),
            avg_kwh,
        });
    }

    Ok(result)
}
