//! Ordered, human-readable diagnostic trace of one calculation.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::types::{CalcInput, LoadBreakdown};
use crate::reference::{INDOOR_RH_PCT, INDOOR_SETPOINT_F};

/// Placeholder for values that do not apply.
const NOT_APPLICABLE: &str = "N/A";

/// A single trace value: either a raw number or a pre-formatted string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraceValue {
    /// Count-like integer.
    Integer(u64),
    /// Raw floating-point value.
    Number(f64),
    /// Key or fixed-point formatted value.
    Text(String),
}

impl fmt::Display for TraceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceValue::Integer(n) => write!(f, "{n}"),
            TraceValue::Number(x) => write!(f, "{x:?}"),
            TraceValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TraceValue {
    fn from(s: &str) -> Self {
        TraceValue::Text(s.to_string())
    }
}

impl From<String> for TraceValue {
    fn from(s: String) -> Self {
        TraceValue::Text(s)
    }
}

impl From<f64> for TraceValue {
    fn from(x: f64) -> Self {
        TraceValue::Number(x)
    }
}

impl From<u32> for TraceValue {
    fn from(n: u32) -> Self {
        TraceValue::Integer(u64::from(n))
    }
}

/// Label → value map that preserves insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    entries: IndexMap<&'static str, TraceValue>,
}

impl Trace {
    /// Appends (or replaces) an entry.
    pub fn push(&mut self, label: &'static str, value: impl Into<TraceValue>) {
        self.entries.insert(label, value.into());
    }

    /// Looks up an entry by label.
    pub fn get(&self, label: &str) -> Option<&TraceValue> {
        self.entries.get(label)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TraceValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the trace has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the trace for a finished calculation.
    ///
    /// Reads only; nothing here feeds back into the numbers.
    ///
    /// # Arguments
    ///
    /// * `input` - Guarded input record the engine ran on
    /// * `b` - Intermediate values
    /// * `cost_per_hour` / `cost_per_tenant` - Final results
    pub fn from_calculation(
        input: &CalcInput,
        b: &LoadBreakdown,
        cost_per_hour: f64,
        cost_per_tenant: f64,
    ) -> Self {
        let mut t = Trace::default();

        t.push("Selected City", b.city.as_str());
        t.push("Outdoor Temp (°F)", b.outdoor_temp_f);
        t.push("Outdoor RH (%)", b.outdoor_rh_pct);
        t.push("Indoor Temp (°F)", INDOOR_SETPOINT_F);
        t.push("Indoor RH (%)", INDOOR_RH_PCT);
        t.push(
            "Temperature Difference",
            format!("{:.2} ({})", b.delta_t_f, b.mode),
        );

        t.push("Base Envelope Load (BTU/h/ft²/°F)", b.base_load);
        t.push("Insulation Level", b.insulation_level.as_str());
        t.push("Insulation Multiplier", format!("{:.2}", b.insulation_mult));
        t.push("Window Area (%)", format!("{:.1}", input.window_area));
        t.push("Window Multiplier", format!("{:.3}", b.window_mult));
        t.push("Envelope Load (BTU/h)", format!("{:.1}", b.envelope_load_btu_h));

        t.push("Occupant Count", input.occupancy_count);
        t.push(
            "Occupant Sensible (BTU/h)",
            format!("{:.1}", b.occupant_sensible_btu_h),
        );
        t.push(
            "Total Sensible Load (BTU/h)",
            format!("{:.1}", b.total_sensible_btu_h),
        );

        t.push("Infiltration Preset", input.infiltration_preset.as_str());
        t.push(
            "Preset Rate (CFM/ft²)",
            b.infiltration
                .preset_rate()
                .map_or_else(|| NOT_APPLICABLE.to_string(), |r| format!("{r:.3}")),
        );
        t.push(
            "Custom Infiltration (CFM)",
            format!("{:.1}", input.infiltration_cfm),
        );
        t.push("Final Infiltration (CFM)", format!("{:.1}", b.infiltration_cfm));
        t.push(
            "Infiltration Latent (BTU/h)",
            format!("{:.1}", b.infiltration_latent_btu_h),
        );

        t.push("Occupant Latent Preset", input.occupant_latent_preset.as_str());
        t.push(
            "Occupant Latent (BTU/h/person)",
            format!("{:.1}", b.occupant_latent_per_person_btu_h),
        );
        t.push(
            "Occupant Latent Load (BTU/h)",
            format!("{:.1}", b.occupant_latent_btu_h),
        );

        t.push(
            "Total Latent Load (BTU/h)",
            format!("{:.1}", b.total_latent_btu_h),
        );
        t.push("Total Load (BTU/h)", format!("{:.1}", b.total_load_btu_h));

        t.push("HVAC System", b.hvac_system.as_str());
        t.push("Default COP", format!("{:.2}", b.default_cop));
        t.push(
            "User COP Override",
            if input.cop_override > 0.0 {
                format!("{:.2}", input.cop_override)
            } else {
                NOT_APPLICABLE.to_string()
            },
        );
        t.push("Effective COP", format!("{:.2}", b.effective_cop));
        t.push("Power Input (kW)", format!("{:.2}", b.power_kw));

        t.push("Electric Rate ($/kWh)", format!("{:.3}", input.electric_rate));
        t.push("Energy Cost/hr ($)", format!("{:.2}", b.energy_cost_per_hour));
        t.push(
            "Depreciation/hr ($)",
            format!("{:.2}", b.depreciation_cost_per_hour),
        );
        t.push("Total Cost/hr ($)", format!("{cost_per_hour:.2}"));
        t.push("Number of Tenancies", input.num_tenancies);
        t.push("Cost/Tenant ($/hr)", format!("{cost_per_tenant:.2}"));

        t
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        writeln!(f, "--- Calculation Trace ---")?;
        for (label, value) in &self.entries {
            let pad = width - label.chars().count();
            writeln!(f, "{label}:{:pad$} {value}", "")?;
        }
        Ok(())
    }
}
