//! Human-readable console reports.

use crate::sched::VisitPlan;
use crate::summary::FacilityAverage;

/// Prints the per-facility average consumption table for a month.
pub fn print_average_report(month: u32, averages: &[FacilityAverage]) {
    println!("--- Average daily consumption (month {month}) ---");
    for avg in averages {
        println!("{:<24} {:>10.2} kWh", avg.facility, avg.avg_kwh);
    }
}

/// Prints the optimal visit plan with its per-day and total costs.
pub fn print_plan(plan: &VisitPlan) {
    println!("--- Optimal visit plan ---");
    println!("{plan}");
}
