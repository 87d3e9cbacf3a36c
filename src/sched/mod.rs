//! Weekly maintenance-visit schedule optimization.
//!
//! Builds a per-facility consumption table for the opening days of a
//! month, then exhaustively searches every day-to-facility assignment for
//! the one with the lowest total cost.

mod search;
pub mod table;
pub mod types;

pub use table::{TableEntry, WeeklyTable};
pub use types::{DayVisit, SearchParams, VisitPlan};

use crate::error::PlanError;
use crate::model::Facility;

/// Computes the minimum-cost assignment of one facility visit per day over
/// the scheduling window, for the selected month.
///
/// A day's cost is the facility's consumption on that date plus
/// `params.switch_penalty` when the previous day visited a different
/// facility. Ties between complete assignments keep the first one found in
/// facility input order, so the result is deterministic.
///
/// Facilities with fewer recorded days than the window stay candidates for
/// the days they cover and drop out of later days.
///
/// # Errors
///
/// * [`PlanError::MonthOutOfRange`] if `month` is not in 1..=12.
/// * [`PlanError::EmptyInput`] if no facilities are supplied or none has a
///   qualifying record for the month.
/// * [`PlanError::NoCompleteSchedule`] if records exist but no assignment
///   can cover the whole window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use maint_opt::model::{ConsumptionRecord, Facility};
/// use maint_opt::sched::{SearchParams, optimal_schedule};
///
/// let mut plant = Facility::new(1, "Plant 01");
/// for day in 1..=7 {
///     plant.records.push(ConsumptionRecord {
///         date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
///         kwh: 10.0,
///     });
/// }
/// let plan = optimal_schedule(&[plant], 6, &SearchParams::default()).unwrap();
/// assert_eq!(plan.days.len(), 7);
/// assert_eq!(plan.total_cost, 70.0);
/// ```
pub fn optimal_schedule(
    facilities: &[Facility],
    month: u32,
    params: &SearchParams,
) -> Result<VisitPlan, PlanError> {
    if !(1..=12).contains(&month) {
        return Err(PlanError::MonthOutOfRange(month));
    }
    if facilities.is_empty() {
        return Err(PlanError::EmptyInput);
    }

    let table = WeeklyTable::build(facilities, month, params.window_days);
    if !table.has_records() {
        return Err(PlanError::EmptyInput);
    }

    let (sequence, total_cost) =
        search::run(&table, params).ok_or(PlanError::NoCompleteSchedule)?;

    Ok(translate(&sequence, total_cost, facilities, &table, params))
}

/// Maps the winning id sequence to named per-day visits with their costs.
fn translate(
    sequence: &[u32],
    total_cost: f64,
    facilities: &[Facility],
    table: &WeeklyTable,
    params: &SearchParams,
) -> VisitPlan {
    let name_of = |id: u32| {
        facilities
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.name.clone())
            .unwrap_or_default()
    };

    let mut days = Vec::with_capacity(sequence.len());
    let mut previous = None;
    for (i, &id) in sequence.iter().enumerate() {
        let day = i + 1;
        let kwh = table.value(id, day).unwrap_or_default();
        let cost = search::day_cost(kwh, previous, id, params);
        days.push(DayVisit {
            day,
            facility_id: id,
            facility: name_of(id),
            cost,
        });
        previous = Some(id);
    }

    VisitPlan { days, total_cost }
}
