//! Infiltration airflow: custom value or per-area preset.

use serde::Serialize;

use crate::reference::INFILTRATION_PRESETS;

/// Where the final infiltration airflow came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum InfiltrationSource {
    /// A custom airflow > 0 was supplied; any preset is ignored.
    Custom {
        /// Airflow (CFM).
        cfm: f64,
    },
    /// A recognized preset scaled by floor area.
    Preset {
        /// Preset rate (CFM/ft²).
        rate_cfm_per_ft2: f64,
        /// `rate · area` (CFM).
        cfm: f64,
    },
    /// No custom airflow and no recognized preset: no infiltration.
    None,
}

impl InfiltrationSource {
    /// Final airflow (CFM).
    pub fn cfm(&self) -> f64 {
        match *self {
            InfiltrationSource::Custom { cfm } | InfiltrationSource::Preset { cfm, .. } => cfm,
            InfiltrationSource::None => 0.0,
        }
    }

    /// Preset rate that produced the airflow, if a preset was used.
    pub fn preset_rate(&self) -> Option<f64> {
        match *self {
            InfiltrationSource::Preset {
                rate_cfm_per_ft2, ..
            } => Some(rate_cfm_per_ft2),
            _ => None,
        }
    }
}

/// Resolves the infiltration airflow.
///
/// # Arguments
///
/// * `custom_cfm` - User airflow; wins outright when > 0
/// * `preset` - Preset key; unknown or blank keys yield no infiltration
/// * `area_ft2` - Floor area (ft²)
pub fn infiltration_airflow(custom_cfm: f64, preset: &str, area_ft2: f64) -> InfiltrationSource {
    if custom_cfm > 0.0 {
        return InfiltrationSource::Custom { cfm: custom_cfm };
    }

    match INFILTRATION_PRESETS.get(preset) {
        Some(rate) => InfiltrationSource::Preset {
            rate_cfm_per_ft2: rate,
            cfm: rate * area_ft2,
        },
        None => {
            if !preset.is_empty() {
                tracing::debug!(preset, "unknown infiltration preset, no infiltration");
            }
            InfiltrationSource::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_scales_with_area() {
        let src = infiltration_airflow(0.0, "Medium", 1000.0);
        assert_eq!(src.preset_rate(), Some(0.09));
        assert!((src.cfm() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn custom_overrides_preset() {
        let src = infiltration_airflow(250.0, "High (Leaky Building)", 1000.0);
        assert_eq!(src, InfiltrationSource::Custom { cfm: 250.0 });
        assert_eq!(src.preset_rate(), None);
        assert_eq!(src.cfm(), 250.0);
    }

    #[test]
    fn non_positive_custom_falls_through_to_preset() {
        let src = infiltration_airflow(-5.0, "Low (Tight Building)", 500.0);
        assert_eq!(src.preset_rate(), Some(0.04));
        assert!((src.cfm() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_or_blank_preset_is_none() {
        assert_eq!(infiltration_airflow(0.0, "", 1000.0), InfiltrationSource::None);
        assert_eq!(infiltration_airflow(0.0, "medium", 1000.0), InfiltrationSource::None);
        assert_eq!(InfiltrationSource::None.cfm(), 0.0);
    }
}
