//! Envelope and occupant sensible loads.

use super::types::Mode;
use crate::reference::{INDOOR_SETPOINT_F, OCCUPANT_SENSIBLE_GAIN_BTU_H};

/// Window multiplier slope per unit of window area.
const WINDOW_SLOPE: f64 = 0.002;

/// Outdoor − indoor temperature difference (°F) and the mode it implies.
pub fn thermal_delta(outdoor_temp_f: f64) -> (f64, Mode) {
    let delta_t = outdoor_temp_f - INDOOR_SETPOINT_F;
    (delta_t, Mode::from_delta(delta_t))
}

/// `1 + 0.002 · window_area`, unbounded above.
pub fn window_multiplier(window_area: f64) -> f64 {
    1.0 + WINDOW_SLOPE * window_area
}

/// Sensible load components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensibleLoad {
    /// Envelope load (BTU/h).
    pub envelope_btu_h: f64,
    /// Signed occupant contribution (BTU/h): positive when cooling, negative when heating.
    pub occupant_btu_h: f64,
    /// `envelope + occupant`, clamped >= 0 (BTU/h).
    pub total_btu_h: f64,
}

/// Envelope plus occupant sensible load.
///
/// Occupants add to a cooling load and offset a heating load.
///
/// # Arguments
///
/// * `base_load` - Base envelope coefficient (BTU/h per ft² per °F)
/// * `insulation_mult` - Insulation multiplier
/// * `window_mult` - Window multiplier
/// * `delta_t` - Outdoor − indoor temperature (°F)
/// * `area_ft2` - Floor area (ft²)
/// * `occupants` - Occupant count
/// * `mode` - Operating mode
pub fn sensible_load(
    base_load: f64,
    insulation_mult: f64,
    window_mult: f64,
    delta_t: f64,
    area_ft2: f64,
    occupants: u32,
    mode: Mode,
) -> SensibleLoad {
    let per_ft2 = base_load * insulation_mult * window_mult * delta_t.abs();
    let envelope_btu_h = per_ft2 * area_ft2;

    let gain = f64::from(occupants) * OCCUPANT_SENSIBLE_GAIN_BTU_H;
    let occupant_btu_h = match mode {
        Mode::Cooling => gain,
        // Subtracting keeps an empty building at +0.0 rather than -0.0.
        Mode::Heating => 0.0 - gain,
    };

    SensibleLoad {
        envelope_btu_h,
        occupant_btu_h,
        total_btu_h: (envelope_btu_h + occupant_btu_h).max(0.0),
    }
}
