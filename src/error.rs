//! Error taxonomy for planning computations.

use std::error::Error;
use std::fmt;

/// Failure modes of the summarizer and the schedule optimizer.
///
/// Inputs are validated before any computation runs; errors are reported
/// to the caller, never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// No facilities were supplied, or no facility has a single
    /// qualifying record for the selected month.
    EmptyInput,
    /// Month selector outside 1..=12.
    MonthOutOfRange(u32),
    /// Qualifying records exist, but every facility's history is shorter
    /// than the scheduling window, so no complete assignment can form.
    NoCompleteSchedule,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "no facilities with qualifying records for the selected month")
            }
            Self::MonthOutOfRange(m) => {
                write!(f, "month {m} is out of range, expected 1-12")
            }
            Self::NoCompleteSchedule => {
                write!(f, "no facility history is long enough to fill the scheduling window")
            }
        }
    }
}

impl Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_month() {
        let msg = PlanError::MonthOutOfRange(13).to_string();
        assert!(msg.contains("13"));
    }

    #[test]
    fn variants_are_comparable() {
        assert_eq!(PlanError::EmptyInput, PlanError::EmptyInput);
        assert_ne!(PlanError::EmptyInput, PlanError::NoCompleteSchedule);
    }
}
