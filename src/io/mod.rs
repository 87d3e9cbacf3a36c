//! File output for planning results.

pub mod export;
