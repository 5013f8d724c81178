//! The load-and-cost engine: one input record in, one result out.

use serde::Serialize;

use super::cost::{effective_cop, hourly_cost, power_kw};
use super::infiltration::infiltration_airflow;
use super::latent::latent_load;
use super::thermal::{sensible_load, thermal_delta, window_multiplier};
use super::trace::Trace;
use super::types::{CalcInput, LoadBreakdown};
use crate::reference::{
    BUILDING_BASE_LOAD, CITIES, HVAC_SYSTEM_COP, INSULATION_FACTOR, OCCUPANT_LATENT_PRESETS,
};

/// Result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcResult {
    /// Total HVAC cost ($/h).
    pub cost_per_hour: f64,
    /// Cost per tenancy ($/h).
    pub cost_per_tenant: f64,
    /// Typed intermediate values.
    pub breakdown: LoadBreakdown,
    /// Human-readable trace of every intermediate value.
    pub trace: Trace,
}

/// Runs the full load and cost calculation.
///
/// Pure and deterministic: identical inputs give bit-identical results.
/// Unknown reference keys resolve to their defaults and out-of-range
/// numbers are clamped, so this never fails.
///
/// # Arguments
///
/// * `input` - Calculation request
///
/// # Returns
///
/// Hourly cost, per-tenant cost, load breakdown and diagnostic trace.
///
/// # Examples
///
/// ```
/// use hvac_cost::calc::engine::calculate;
/// use hvac_cost::calc::types::CalcInput;
///
/// let result = calculate(&CalcInput {
///     area_ft2: 1000.0,
///     electric_rate: 0.12,
///     num_tenancies: 4,
///     ..CalcInput::default()
/// });
/// assert_eq!(result.cost_per_tenant, result.cost_per_hour / 4.0);
/// ```
pub fn calculate(input: &CalcInput) -> CalcResult {
    let input = input.clone().normalized();

    let city = CITIES.resolve(&input.city);
    let building = BUILDING_BASE_LOAD.resolve(&input.building_type);
    let insulation = INSULATION_FACTOR.resolve(&input.insulation_level);
    let hvac = HVAC_SYSTEM_COP.resolve(&input.hvac_system);
    let latent_preset = OCCUPANT_LATENT_PRESETS.resolve(&input.occupant_latent_preset);

    let climate = city.value;
    let (delta_t, mode) = thermal_delta(climate.temp_f);
    tracing::debug!(city = city.key, delta_t, %mode, "thermal delta");

    let window_mult = window_multiplier(input.window_area);
    let sensible = sensible_load(
        building.value,
        insulation.value,
        window_mult,
        delta_t,
        input.area_ft2,
        input.occupancy_count,
        mode,
    );

    let infiltration = infiltration_airflow(
        input.infiltration_cfm,
        &input.infiltration_preset,
        input.area_ft2,
    );
    let latent = latent_load(
        climate.temp_f,
        climate.rh_pct,
        infiltration.cfm(),
        input.occupancy_count,
        latent_preset.value,
        mode,
    );

    let total_load = sensible.total_btu_h + latent.total_btu_h;
    let cop = effective_cop(input.cop_override, hvac.value);
    let power = power_kw(total_load, cop);
    let cost = hourly_cost(
        power,
        input.electric_rate,
        input.hvac_capital_cost,
        input.hvac_lifespan_years,
        input.annual_operating_hours,
        input.num_tenancies,
    );

    let breakdown = LoadBreakdown {
        city: city.key.to_string(),
        outdoor_temp_f: climate.temp_f,
        outdoor_rh_pct: climate.rh_pct,
        delta_t_f: delta_t,
        mode,
        building_type: building.key.to_string(),
        base_load: building.value,
        insulation_level: insulation.key.to_string(),
        insulation_mult: insulation.value,
        window_mult,
        envelope_load_btu_h: sensible.envelope_btu_h,
        occupant_sensible_btu_h: sensible.occupant_btu_h,
        total_sensible_btu_h: sensible.total_btu_h,
        infiltration,
        infiltration_cfm: infiltration.cfm(),
        w_outdoor: latent.w_outdoor,
        w_indoor: latent.w_indoor,
        dry_air_mass_flow_lb_h: latent.mass_flow_lb_h,
        infiltration_latent_btu_h: latent.infiltration_btu_h,
        occupant_latent_per_person_btu_h: latent_preset.value,
        occupant_latent_btu_h: latent.occupant_btu_h,
        total_latent_btu_h: latent.total_btu_h,
        total_load_btu_h: total_load,
        hvac_system: hvac.key.to_string(),
        default_cop: hvac.value,
        effective_cop: cop,
        power_kw: power,
        energy_cost_per_hour: cost.energy,
        depreciation_cost_per_hour: cost.depreciation,
    };

    let trace = Trace::from_calculation(&input, &breakdown, cost.total, cost.per_tenant);

    CalcResult {
        cost_per_hour: cost.total,
        cost_per_tenant: cost.per_tenant,
        breakdown,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::infiltration::InfiltrationSource;
    use crate::calc::trace::TraceValue;
    use crate::calc::types::Mode;

    fn chicago_office() -> CalcInput {
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

    fn text(trace: &Trace, label: &str) -> String {
        trace.get(label).map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn chicago_regression_vector() {
        let r = calculate(&chicago_office());
        let b = &r.breakdown;

        assert_eq!(b.delta_t_f, -22.0);
        assert_eq!(b.mode, Mode::Heating);
        assert_eq!(b.envelope_load_btu_h, 660_000.0);
        assert_eq!(b.occupant_sensible_btu_h, -3500.0);
        assert_eq!(b.total_sensible_btu_h, 656_500.0);
        assert_eq!(b.occupant_latent_btu_h, 0.0);
        assert!((b.infiltration_cfm - 90.0).abs() < 1e-9);
        assert!((b.infiltration_latent_btu_h - 1295.786_327_748_756).abs() < 1e-6);
        assert!((b.total_load_btu_h - 657_795.786_327_748_8).abs() < 1e-6);
        assert!((b.power_kw - 64.262_972_482_195_08).abs() < 1e-9);
        assert!((b.energy_cost_per_hour - 7.711_556_697_863_41).abs() < 1e-9);
        assert!((b.depreciation_cost_per_hour - 0.166_666_666_666_666_66).abs() < 1e-12);
        assert!((r.cost_per_hour - 7.878_223_364_530_076).abs() < 1e-9);
        assert_eq!(r.cost_per_tenant, r.cost_per_hour);
    }

    #[test]
    fn chicago_trace_formatting() {
        let r = calculate(&chicago_office());
        let t = &r.trace;
        assert_eq!(t.len(), 36);
        assert_eq!(text(t, "Selected City"), "Chicago");
        assert_eq!(text(t, "Outdoor Temp (°F)"), "50.0");
        assert_eq!(text(t, "Temperature Difference"), "-22.00 (Heating)");
        assert_eq!(text(t, "Insulation Multiplier"), "1.00");
        assert_eq!(text(t, "Window Multiplier"), "1.000");
        assert_eq!(text(t, "Envelope Load (BTU/h)"), "660000.0");
        assert_eq!(text(t, "Occupant Sensible (BTU/h)"), "-3500.0");
        assert_eq!(text(t, "Preset Rate (CFM/ft²)"), "0.090");
        assert_eq!(text(t, "Final Infiltration (CFM)"), "90.0");
        assert_eq!(text(t, "Infiltration Latent (BTU/h)"), "1295.8");
        assert_eq!(text(t, "Total Load (BTU/h)"), "657795.8");
        assert_eq!(text(t, "User COP Override"), "N/A");
        assert_eq!(text(t, "Effective COP"), "3.00");
        assert_eq!(text(t, "Power Input (kW)"), "64.26");
        assert_eq!(text(t, "Electric Rate ($/kWh)"), "0.120");
        assert_eq!(text(t, "Energy Cost/hr ($)"), "7.71");
        assert_eq!(text(t, "Depreciation/hr ($)"), "0.17");
        assert_eq!(text(t, "Total Cost/hr ($)"), "7.88");
        assert_eq!(t.get("Number of Tenancies"), Some(&TraceValue::Integer(1)));
        assert_eq!(text(t, "Cost/Tenant ($/hr)"), "7.88");
    }

    #[test]
    fn empty_building_in_heating_traces_unsigned_zero() {
        let r = calculate(&CalcInput {
            occupancy_count: 0,
            ..chicago_office()
        });
        assert_eq!(r.breakdown.mode, Mode::Heating);
        assert_eq!(text(&r.trace, "Occupant Sensible (BTU/h)"), "0.0");
        assert_eq!(text(&r.trace, "Total Sensible Load (BTU/h)"), "660000.0");
    }

    #[test]
    fn trace_order_starts_and_ends_as_documented() {
        let r = calculate(&chicago_office());
        let labels: Vec<_> = r.trace.iter().map(|(k, _)| k).collect();
        assert_eq!(labels.first(), Some(&"Selected City"));
        assert_eq!(labels.last(), Some(&"Cost/Tenant ($/hr)"));
    }

    #[test]
    fn unknown_keys_fall_back() {
        let input = CalcInput {
            city: "Gotham".into(),
            building_type: "Castle".into(),
            hvac_system: "Perpetual Motion".into(),
            insulation_level: "Extreme".into(),
            infiltration_preset: "Sieve".into(),
            occupant_latent_preset: "Dancing".into(),
            ..chicago_office()
        };
        let r = calculate(&input);
        let b = &r.breakdown;
        assert_eq!(b.city, "Chicago");
        assert_eq!(b.building_type, "Office");
        assert_eq!(b.base_load, 30.0);
        assert_eq!(b.hvac_system, "Rooftop Unit");
        assert_eq!(b.default_cop, 3.0);
        assert_eq!(b.insulation_level, "Medium");
        assert_eq!(b.insulation_mult, 1.0);
        assert_eq!(b.infiltration, InfiltrationSource::None);
        assert_eq!(b.infiltration_cfm, 0.0);
        assert_eq!(b.occupant_latent_per_person_btu_h, 200.0);
        assert_eq!(text(&r.trace, "Preset Rate (CFM/ft²)"), "N/A");
        assert_eq!(text(&r.trace, "Infiltration Preset"), "Sieve");
    }

    #[test]
    fn custom_cfm_overrides_preset() {
        let input = CalcInput {
            infiltration_cfm: 300.0,
            infiltration_preset: "High (Leaky Building)".into(),
            ..chicago_office()
        };
        let r = calculate(&input);
        assert_eq!(r.breakdown.infiltration_cfm, 300.0);
        assert_eq!(text(&r.trace, "Custom Infiltration (CFM)"), "300.0");
        assert_eq!(text(&r.trace, "Preset Rate (CFM/ft²)"), "N/A");
    }

    #[test]
    fn setpoint_equal_outdoor_is_heating() {
        // No table city sits at 72 °F; exercise the boundary through the stage directly.
        let (delta, mode) = thermal_delta(72.0);
        assert_eq!(delta, 0.0);
        assert_eq!(mode, Mode::Heating);
    }

    #[test]
    fn cooling_case_counts_occupant_latent() {
        let input = CalcInput {
            city: "Miami".into(),
            occupancy_count: 20,
            num_tenancies: 4,
            ..chicago_office()
        };
        let r = calculate(&input);
        let b = &r.breakdown;
        assert_eq!(b.mode, Mode::Cooling);
        assert_eq!(b.total_sensible_btu_h, 97_000.0);
        assert_eq!(b.occupant_latent_btu_h, 4000.0);
        assert!((r.cost_per_hour - 1.379_026_586_629_018_6).abs() < 1e-9);
        assert_eq!(r.cost_per_tenant, r.cost_per_hour / 4.0);
        assert_eq!(text(&r.trace, "Temperature Difference"), "3.00 (Cooling)");
    }

    #[test]
    fn cop_override_is_used_and_traced() {
        let input = CalcInput {
            cop_override: 6.0,
            ..chicago_office()
        };
        let r = calculate(&input);
        assert_eq!(r.breakdown.effective_cop, 6.0);
        assert_eq!(text(&r.trace, "User COP Override"), "6.00");
        assert_eq!(text(&r.trace, "Default COP"), "3.00");
    }

    #[test]
    fn negative_cop_override_falls_back() {
        let input = CalcInput {
            cop_override: -2.0,
            hvac_system: "VRF System".into(),
            ..chicago_office()
        };
        let r = calculate(&input);
        assert_eq!(r.breakdown.effective_cop, 4.5);
        assert_eq!(text(&r.trace, "User COP Override"), "N/A");
    }

    #[test]
    fn engine_guards_unnormalized_input() {
        let input = CalcInput {
            num_tenancies: 0,
            hvac_lifespan_years: 0.0,
            annual_operating_hours: -5.0,
            area_ft2: -100.0,
            ..chicago_office()
        };
        let r = calculate(&input);
        assert!(r.cost_per_hour.is_finite());
        assert_eq!(r.cost_per_tenant, r.cost_per_hour);
        assert_eq!(r.breakdown.envelope_load_btu_h, 0.0);
        assert_eq!(r.breakdown.depreciation_cost_per_hour, 5000.0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = chicago_office();
        let a = calculate(&input);
        let b = calculate(&input);
        assert_eq!(a.cost_per_hour.to_bits(), b.cost_per_hour.to_bits());
        assert_eq!(a.cost_per_tenant.to_bits(), b.cost_per_tenant.to_bits());
        assert_eq!(a, b);
    }
}
