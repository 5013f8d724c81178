//! Conversion of raw form text into a normalized [`CalcInput`].
//!
//! Field names match the calculator's web form. Blank or malformed numeric
//! text becomes 0 before clamping; blank keys take the documented defaults.

use serde::{Deserialize, Serialize};

use crate::calc::types::CalcInput;
use crate::reference::{
    DEFAULT_BUILDING_TYPE, DEFAULT_CITY, DEFAULT_HVAC_SYSTEM, DEFAULT_INSULATION,
};

/// Untyped form submission. Every field is optional text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub city: Option<String>,
    pub building_type: Option<String>,
    pub area: Option<String>,
    pub window_area: Option<String>,
    pub num_tenancies: Option<String>,
    pub electric_rate: Option<String>,
    pub hvac_system: Option<String>,
    /// COP override.
    pub hvac_efficiency: Option<String>,
    pub insulation_level: Option<String>,
    pub occupancy_count: Option<String>,
    pub hvac_capital_cost: Option<String>,
    pub hvac_lifespan_years: Option<String>,
    pub annual_operating_hours: Option<String>,
    pub infiltration_preset: Option<String>,
    pub infiltration_cfm: Option<String>,
    pub occupant_latent_preset: Option<String>,
}

/// Parses a float, treating blank, malformed and non-finite text as 0.
pub fn float_or_zero(text: Option<&str>) -> f64 {
    text.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .unwrap_or(0.0)
}

/// Parses an integer, treating blank and malformed text (including
/// fractional values like `"2.5"`) as 0.
pub fn int_or_zero(text: Option<&str>) -> i64 {
    text.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

fn count(text: Option<&str>) -> u32 {
    u32::try_from(int_or_zero(text).max(0)).unwrap_or(u32::MAX)
}

fn key_or(text: Option<&str>, default: &str) -> String {
    text.unwrap_or(default).to_string()
}

impl RawInputs {
    /// Coerces every field and applies the input guards.
    ///
    /// Absent key fields take their defaults; a key that is present but not
    /// in its table is kept verbatim and resolved by the engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use hvac_cost::input::RawInputs;
    ///
    /// let raw = RawInputs {
    ///     area: Some("not a number".into()),
    ///     num_tenancies: Some("0".into()),
    ///     ..RawInputs::default()
    /// };
    /// let input = raw.to_input();
    /// assert_eq!(input.area_ft2, 0.0);
    /// assert_eq!(input.num_tenancies, 1);
    /// ```
    pub fn to_input(&self) -> CalcInput {
        CalcInput {
            city: key_or(self.city.as_deref(), DEFAULT_CITY),
            building_type: key_or(self.building_type.as_deref(), DEFAULT_BUILDING_TYPE),
            area_ft2: float_or_zero(self.area.as_deref()),
            window_area: float_or_zero(self.window_area.as_deref()),
            num_tenancies: count(self.num_tenancies.as_deref()),
            electric_rate: float_or_zero(self.electric_rate.as_deref()),
            hvac_system: key_or(self.hvac_system.as_deref(), DEFAULT_HVAC_SYSTEM),
            cop_override: float_or_zero(self.hvac_efficiency.as_deref()),
            insulation_level: key_or(self.insulation_level.as_deref(), DEFAULT_INSULATION),
            occupancy_count: count(self.occupancy_count.as_deref()),
            hvac_capital_cost: float_or_zero(self.hvac_capital_cost.as_deref()),
            hvac_lifespan_years: float_or_zero(self.hvac_lifespan_years.as_deref()),
            annual_operating_hours: float_or_zero(self.annual_operating_hours.as_deref()),
            infiltration_preset: key_or(self.infiltration_preset.as_deref(), ""),
            infiltration_cfm: float_or_zero(self.infiltration_cfm.as_deref()),
            occupant_latent_preset: key_or(self.occupant_latent_preset.as_deref(), ""),
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_coercion() {
        assert_eq!(float_or_zero(Some("12.5")), 12.5);
        assert_eq!(float_or_zero(Some(" 7 ")), 7.0);
        assert_eq!(float_or_zero(Some("")), 0.0);
        assert_eq!(float_or_zero(Some("abc")), 0.0);
        assert_eq!(float_or_zero(Some("NaN")), 0.0);
        assert_eq!(float_or_zero(Some("inf")), 0.0);
        assert_eq!(float_or_zero(None), 0.0);
    }

    #[test]
    fn int_coercion_rejects_fractions() {
        assert_eq!(int_or_zero(Some("3")), 3);
        assert_eq!(int_or_zero(Some("-4")), -4);
        assert_eq!(int_or_zero(Some("2.5")), 0);
        assert_eq!(int_or_zero(Some("")), 0);
    }

    #[test]
    fn empty_form_gets_defaults_and_guards() {
        let input = RawInputs::default().to_input();
        assert_eq!(input.city, "Chicago");
        assert_eq!(input.building_type, "Office");
        assert_eq!(input.hvac_system, "Rooftop Unit");
        assert_eq!(input.insulation_level, "Medium");
        assert_eq!(input.num_tenancies, 1);
        assert_eq!(input.hvac_lifespan_years, 1.0);
        assert_eq!(input.annual_operating_hours, 1.0);
        assert_eq!(input.infiltration_preset, "");
    }

    #[test]
    fn negative_counts_clamp_to_zero_or_one() {
        let raw = RawInputs {
            occupancy_count: Some("-5".into()),
            num_tenancies: Some("-2".into()),
            ..RawInputs::default()
        };
        let input = raw.to_input();
        assert_eq!(input.occupancy_count, 0);
        assert_eq!(input.num_tenancies, 1);
    }

    #[test]
    fn unknown_keys_are_kept_for_the_engine() {
        let raw = RawInputs {
            city: Some("Springfield".into()),
            ..RawInputs::default()
        };
        assert_eq!(raw.to_input().city, "Springfield");
    }

    #[test]
    fn full_form() {
        let raw = RawInputs {
            city: Some("Miami".into()),
            building_type: Some("Retail".into()),
            area: Some("2500".into()),
            window_area: Some("15".into()),
            num_tenancies: Some("3".into()),
            electric_rate: Some("0.15".into()),
            hvac_system: Some("Heat Pump".into()),
            hvac_efficiency: Some("".into()),
            insulation_level: Some("High".into()),
            occupancy_count: Some("40".into()),
            hvac_capital_cost: Some("20000".into()),
            hvac_lifespan_years: Some("20".into()),
            annual_operating_hours: Some("3000".into()),
            infiltration_preset: Some("Low (Tight Building)".into()),
            infiltration_cfm: Some("".into()),
            occupant_latent_preset: Some("High Activity (Active, Light Exercise)".into()),
        };
        let input = raw.to_input();
        assert_eq!(input.area_ft2, 2500.0);
        assert_eq!(input.num_tenancies, 3);
        assert_eq!(input.cop_override, 0.0);
        assert_eq!(input.occupancy_count, 40);
        assert_eq!(input.infiltration_cfm, 0.0);
    }
}
