//! Load-and-cost calculation engine and its stages.

/// Operating costs from power draw and equipment depreciation.
pub mod cost;
pub mod engine;
/// Infiltration airflow selection.
pub mod infiltration;
/// Infiltration and occupant latent loads.
pub mod latent;
pub mod psychro;
/// Envelope and occupant sensible loads.
pub mod thermal;
pub mod trace;
pub mod types;

pub use engine::{CalcResult, calculate};
pub use trace::{Trace, TraceValue};
pub use types::{CalcInput, LoadBreakdown, Mode};
