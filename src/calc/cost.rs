//! Power draw and hourly cost.

use crate::reference::BTU_PER_KWH;

/// COP actually used for the power calculation.
///
/// An override > 0 wins; otherwise, or if the result is somehow still not
/// positive, the system's table COP is used.
pub fn effective_cop(cop_override: f64, default_cop: f64) -> f64 {
    let cop = if cop_override > 0.0 {
        cop_override
    } else {
        default_cop
    };
    if cop > 0.0 { cop } else { default_cop }
}

/// Electrical input (kW) for a thermal load (BTU/h) at the given COP.
pub fn power_kw(total_load_btu_h: f64, cop: f64) -> f64 {
    total_load_btu_h / (BTU_PER_KWH * cop)
}

/// Hourly cost components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyCost {
    /// Energy cost ($/h).
    pub energy: f64,
    /// Equipment depreciation ($/h).
    pub depreciation: f64,
    /// `energy + depreciation` ($/h).
    pub total: f64,
    /// `total / tenancies` ($/h).
    pub per_tenant: f64,
}

/// Computes energy, depreciation and per-tenant cost.
///
/// Lifespan and operating hours are floored at 1 and tenancies at 1 so no
/// denominator can be zero.
///
/// # Arguments
///
/// * `power_kw` - Electrical input (kW)
/// * `electric_rate` - Tariff ($/kWh)
/// * `capital_cost` - Equipment capital cost ($)
/// * `lifespan_years` - Equipment lifespan (years)
/// * `annual_hours` - Operating hours per year
/// * `tenancies` - Number of tenancies
pub fn hourly_cost(
    power_kw: f64,
    electric_rate: f64,
    capital_cost: f64,
    lifespan_years: f64,
    annual_hours: f64,
    tenancies: u32,
) -> HourlyCost {
    let energy = power_kw * electric_rate;
    let depreciation = capital_cost / (lifespan_years.max(1.0) * annual_hours.max(1.0));
    let total = energy + depreciation;
    HourlyCost {
        energy,
        depreciation,
        total,
        per_tenant: total / f64::from(tenancies.max(1)),
    }
}
