//! Hourly HVAC energy and per-tenant cost estimator.

#[cfg(feature = "api")]
pub mod api;
/// Load-and-cost engine and its stages.
pub mod calc;
pub mod config;
pub mod input;
/// Trace export.
pub mod io;
pub mod reference;
