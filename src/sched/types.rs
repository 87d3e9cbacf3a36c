//! Search parameters and schedule result types.

use std::fmt;

use serde::Serialize;

/// Tunable parameters of the weekly schedule search.
///
/// The classic planning problem uses a 7-day window with a switching
/// penalty of 5; both are parameters so the search stays testable at
/// smaller scales.
///
/// # Examples
///
/// ```
/// use maint_opt::sched::SearchParams;
///
/// let params = SearchParams::default();
/// assert_eq!(params.window_days, 7);
/// assert_eq!(params.switch_penalty, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Number of consecutive days to schedule (must be > 0).
    pub window_days: usize,
    /// Cost added whenever consecutive days visit different facilities.
    pub switch_penalty: f64,
}

impl SearchParams {
    /// Creates search parameters.
    ///
    /// # Panics
    ///
    /// Panics if `window_days` is zero.
    pub fn new(window_days: usize, switch_penalty: f64) -> Self {
        assert!(window_days > 0, "window_days must be > 0");
        Self {
            window_days,
            switch_penalty,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            window_days: 7,
            switch_penalty: 5.0,
        }
    }
}

/// One scheduled visit: a day of the window and the facility assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayVisit {
    /// Day of the window, 1-indexed.
    pub day: usize,
    /// Assigned facility id.
    pub facility_id: u32,
    /// Assigned facility display name.
    pub facility: String,
    /// Cost of this day: the facility's consumption plus the switching
    /// penalty when the previous day visited a different facility.
    pub cost: f64,
}

/// The minimum-cost complete assignment found by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitPlan {
    /// One visit per day, covering the whole window in day order.
    pub days: Vec<DayVisit>,
    /// Sum of all per-day costs.
    pub total_cost: f64,
}

impl fmt::Display for VisitPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in &self.days {
            writeln!(
                f,
                "Day {}: {} (cost {:.2})",
                visit.day, visit.facility, visit.cost
            )?;
        }
        write!(f, "Total cost: {:.2}", self.total_cost)
    }
}
