//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use hvac_cost::calc::types::CalcInput;

/// The documented regression vector: a 1000 ft² Chicago office.
pub fn chicago_office() -> CalcInput {
    CalcInput {
        city: "Chicago".into(),
        building_type: "Office".into(),
        area_ft2: 1000.0,
        window_area: 0.0,
        num_tenancies: 1,
        electric_rate: 0.12,
        hvac_system: "Rooftop Unit".into(),
        cop_override: 0.0,
        insulation_level: "Medium".into(),
        occupancy_count: 10,
        hvac_capital_cost: 5000.0,
        hvac_lifespan_years: 15.0,
        annual_operating_hours: 2000.0,
        infiltration_preset: "Medium".into(),
        infiltration_cfm: 0.0,
        occupant_latent_preset: "Medium Activity (Typical Office/Retail)".into(),
    }
}

/// Asserts `actual` is within `tol` of `expected`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}
