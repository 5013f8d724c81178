//! Core calculation types: the input record, operating mode and load breakdown.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::infiltration::InfiltrationSource;
use crate::reference::{
    DEFAULT_BUILDING_TYPE, DEFAULT_CITY, DEFAULT_HVAC_SYSTEM, DEFAULT_INSULATION,
};

/// One calculation request.
///
/// Reference keys are free-form strings; unknown keys are resolved to their
/// documented defaults by the engine rather than rejected. Call
/// [`CalcInput::normalized`] before handing a record built from untrusted
/// values to the engine (the engine re-applies the same guards anyway).
///
/// # Examples
///
/// ```
/// use hvac_cost::calc::types::CalcInput;
///
/// let input = CalcInput {
///     num_tenancies: 0,
///     ..CalcInput::default()
/// }
/// .normalized();
/// assert_eq!(input.num_tenancies, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcInput {
    /// City key into the climate table.
    pub city: String,
    /// Building type key into the base-load table.
    pub building_type: String,
    /// Conditioned floor area (ft², >= 0).
    pub area_ft2: f64,
    /// Window area term feeding the window multiplier (>= 0, unbounded).
    pub window_area: f64,
    /// Number of tenancies sharing the cost (>= 1).
    pub num_tenancies: u32,
    /// Electricity tariff ($/kWh, >= 0).
    pub electric_rate: f64,
    /// HVAC system key into the COP table.
    pub hvac_system: String,
    /// User COP override; values <= 0 mean "use the table default".
    pub cop_override: f64,
    /// Insulation level key into the multiplier table.
    pub insulation_level: String,
    /// Number of occupants.
    pub occupancy_count: u32,
    /// HVAC equipment capital cost ($, >= 0).
    pub hvac_capital_cost: f64,
    /// Expected equipment lifespan (years, >= 1).
    pub hvac_lifespan_years: f64,
    /// Annual operating hours (>= 1).
    pub annual_operating_hours: f64,
    /// Named infiltration preset; ignored when `infiltration_cfm` is > 0.
    pub infiltration_preset: String,
    /// Custom infiltration airflow (CFM); > 0 overrides the preset.
    pub infiltration_cfm: f64,
    /// Occupant activity preset key into the latent table.
    pub occupant_latent_preset: String,
}

impl Default for CalcInput {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            building_type: DEFAULT_BUILDING_TYPE.to_string(),
            area_ft2: 0.0,
            window_area: 0.0,
            num_tenancies: 1,
            electric_rate: 0.0,
            hvac_system: DEFAULT_HVAC_SYSTEM.to_string(),
            cop_override: 0.0,
            insulation_level: DEFAULT_INSULATION.to_string(),
            occupancy_count: 0,
            hvac_capital_cost: 0.0,
            hvac_lifespan_years: 1.0,
            annual_operating_hours: 1.0,
            infiltration_preset: String::new(),
            infiltration_cfm: 0.0,
            occupant_latent_preset: String::new(),
        }
    }
}

impl CalcInput {
    /// Applies the range guards every caller must honor.
    ///
    /// Non-finite numbers are treated like invalid text and become 0 before
    /// clamping. Reference keys are left untouched.
    pub fn normalized(mut self) -> Self {
        self.area_ft2 = finite_or_zero(self.area_ft2).max(0.0);
        self.window_area = finite_or_zero(self.window_area).max(0.0);
        self.num_tenancies = self.num_tenancies.max(1);
        self.electric_rate = finite_or_zero(self.electric_rate).max(0.0);
        self.cop_override = finite_or_zero(self.cop_override);
        self.hvac_capital_cost = finite_or_zero(self.hvac_capital_cost).max(0.0);
        self.hvac_lifespan_years = finite_or_zero(self.hvac_lifespan_years).max(1.0);
        self.annual_operating_hours = finite_or_zero(self.annual_operating_hours).max(1.0);
        self.infiltration_cfm = finite_or_zero(self.infiltration_cfm);
        self
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// HVAC operating mode, decided by the sign of the outdoor–indoor delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Outdoor air warmer than the setpoint.
    Cooling,
    /// Outdoor air at or below the setpoint.
    Heating,
}

impl Mode {
    /// Selects the mode for a temperature delta (outdoor − indoor, °F).
    ///
    /// A zero delta is `Heating`.
    pub fn from_delta(delta_t: f64) -> Self {
        if delta_t > 0.0 {
            Mode::Cooling
        } else {
            Mode::Heating
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cooling => f.write_str("Cooling"),
            Mode::Heating => f.write_str("Heating"),
        }
    }
}

/// Every intermediate quantity of one calculation, in calculation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBreakdown {
    /// Resolved city key.
    pub city: String,
    /// Outdoor dry-bulb temperature (°F).
    pub outdoor_temp_f: f64,
    /// Outdoor relative humidity (%).
    pub outdoor_rh_pct: f64,
    /// Outdoor − indoor temperature (°F).
    pub delta_t_f: f64,
    /// Operating mode.
    pub mode: Mode,
    /// Resolved building type key.
    pub building_type: String,
    /// Base envelope load (BTU/h per ft² per °F).
    pub base_load: f64,
    /// Resolved insulation level key.
    pub insulation_level: String,
    /// Insulation multiplier.
    pub insulation_mult: f64,
    /// Window multiplier.
    pub window_mult: f64,
    /// Envelope load (BTU/h).
    pub envelope_load_btu_h: f64,
    /// Signed occupant sensible contribution (BTU/h).
    pub occupant_sensible_btu_h: f64,
    /// Total sensible load, clamped >= 0 (BTU/h).
    pub total_sensible_btu_h: f64,
    /// Origin of the infiltration airflow.
    pub infiltration: InfiltrationSource,
    /// Final infiltration airflow (CFM).
    pub infiltration_cfm: f64,
    /// Outdoor humidity ratio.
    pub w_outdoor: f64,
    /// Indoor humidity ratio.
    pub w_indoor: f64,
    /// Dry-air mass flow from infiltration (lb/h).
    pub dry_air_mass_flow_lb_h: f64,
    /// Infiltration latent load, clamped >= 0 (BTU/h).
    pub infiltration_latent_btu_h: f64,
    /// Latent gain per occupant from the preset (BTU/h).
    pub occupant_latent_per_person_btu_h: f64,
    /// Occupant latent load (BTU/h), zero in heating mode.
    pub occupant_latent_btu_h: f64,
    /// Total latent load (BTU/h).
    pub total_latent_btu_h: f64,
    /// Sensible + latent (BTU/h).
    pub total_load_btu_h: f64,
    /// Resolved HVAC system key.
    pub hvac_system: String,
    /// COP from the system table.
    pub default_cop: f64,
    /// COP actually used.
    pub effective_cop: f64,
    /// Electrical input (kW).
    pub power_kw: f64,
    /// Energy cost ($/h).
    pub energy_cost_per_hour: f64,
    /// Equipment depreciation ($/h).
    pub depreciation_cost_per_hour: f64,
}
