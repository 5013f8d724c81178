//! File output.

/// CSV export of calculation traces.
pub mod export;
