//! Facility maintenance visit planning over daily energy consumption.
//!
//! Two independent computations over the same records: the per-facility
//! monthly consumption average, and the minimum-cost weekly assignment of
//! maintenance visits found by exhaustive search.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod reporting;
/// Consumption table construction and the weekly schedule search.
pub mod sched;
pub mod store;
pub mod summary;
