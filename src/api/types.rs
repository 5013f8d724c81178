//! API request and response types.

use serde::Serialize;

use crate::calc::engine::CalcResult;
use crate::calc::trace::Trace;
use crate::calc::types::CalcInput;
use crate::reference::{
    BUILDING_BASE_LOAD, CITIES, Climate, HVAC_SYSTEM_COP, INFILTRATION_PRESETS,
    INSULATION_FACTOR, OCCUPANT_LATENT_PRESETS, ReferenceTable,
};

/// Calculation response: headline numbers, the normalized input and the trace.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Total HVAC cost ($/h).
    pub cost_per_hour: f64,
    /// Cost per tenancy ($/h).
    pub cost_per_tenant: f64,
    /// Input record after coercion and clamping, for re-populating a form.
    pub inputs: CalcInput,
    /// Ordered diagnostic trace.
    pub trace: Trace,
}

impl CalculateResponse {
    /// Combines the input the engine ran on with its result.
    pub fn new(inputs: CalcInput, result: CalcResult) -> Self {
        Self {
            cost_per_hour: result.cost_per_hour,
            cost_per_tenant: result.cost_per_tenant,
            inputs,
            trace: result.trace,
        }
    }
}

/// One keyed entry of a scalar reference table.
#[derive(Debug, Clone, Serialize)]
pub struct TableEntry {
    /// Table key.
    pub name: &'static str,
    /// Table value.
    pub value: f64,
}

/// One city entry.
#[derive(Debug, Clone, Serialize)]
pub struct CityEntry {
    /// City key.
    pub name: &'static str,
    /// Outdoor conditions.
    #[serde(flatten)]
    pub climate: Climate,
}

/// Every reference table, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceResponse {
    pub cities: Vec<CityEntry>,
    pub building_types: Vec<TableEntry>,
    pub insulation_levels: Vec<TableEntry>,
    pub hvac_systems: Vec<TableEntry>,
    pub infiltration_presets: Vec<TableEntry>,
    pub occupant_latent_presets: Vec<TableEntry>,
}

fn entries(table: &ReferenceTable<f64>) -> Vec<TableEntry> {
    table
        .entries
        .iter()
        .map(|&(name, value)| TableEntry { name, value })
        .collect()
}

impl ReferenceResponse {
    /// Lists the static reference tables.
    pub fn from_tables() -> Self {
        Self {
            cities: CITIES
                .entries
                .iter()
                .map(|&(name, climate)| CityEntry { name, climate })
                .collect(),
            building_types: entries(&BUILDING_BASE_LOAD),
            insulation_levels: entries(&INSULATION_FACTOR),
            hvac_systems: entries(&HVAC_SYSTEM_COP),
            infiltration_presets: entries(&INFILTRATION_PRESETS),
            occupant_latent_presets: entries(&OCCUPANT_LATENT_PRESETS),
        }
    }
}
