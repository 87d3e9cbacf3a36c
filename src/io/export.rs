//! CSV export for computed visit plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sched::VisitPlan;

/// Column header for plan CSV export.
const HEADER: &str = "day,facility_id,facility,cost_kwh";

/// Exports a visit plan to a CSV file at the given path.
///
/// Writes a header row followed by one data row per scheduled day.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &VisitPlan, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a visit plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &VisitPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for visit in &plan.days {
        wtr.write_record(&[
            visit.day.to_string(),
            visit.facility_id.to_string(),
            visit.facility.clone(),
            format!("{:.4}", visit.cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
