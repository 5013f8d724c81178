//! Latent loads from infiltration moisture and occupants.

use super::psychro::humidity_ratio_sea_level;
use super::types::Mode;
use crate::reference::{INDOOR_RH_PCT, INDOOR_SETPOINT_F};

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;
/// Standard air density (lb/ft³).
const AIR_DENSITY_LB_FT3: f64 = 0.075;
/// Latent heat factor (BTU per lb of water per unit humidity ratio).
const LATENT_HEAT_BTU_LB: f64 = 1061.0;

/// Converts an airflow to a dry-air mass flow (lb/h).
pub fn dry_air_mass_flow_lb_h(cfm: f64) -> f64 {
    cfm * MINUTES_PER_HOUR * AIR_DENSITY_LB_FT3
}

/// Latent load components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatentLoad {
    /// Outdoor humidity ratio.
    pub w_outdoor: f64,
    /// Indoor humidity ratio.
    pub w_indoor: f64,
    /// Dry-air mass flow (lb/h).
    pub mass_flow_lb_h: f64,
    /// Infiltration latent load, >= 0 (BTU/h).
    pub infiltration_btu_h: f64,
    /// Occupant latent load (BTU/h).
    pub occupant_btu_h: f64,
    /// `infiltration + occupant` (BTU/h).
    pub total_btu_h: f64,
}

/// Infiltration and occupant latent load.
///
/// Cooling counts moisture carried in by humid outdoor air. Heating counts
/// the symmetric moisture deficit of dry outdoor air, a simplified stand-in
/// for humidification. Occupant latent gain only counts while cooling.
///
/// # Arguments
///
/// * `outdoor_temp_f` / `outdoor_rh_pct` - Outdoor conditions
/// * `infiltration_cfm` - Infiltration airflow (CFM)
/// * `occupants` - Occupant count
/// * `latent_per_person` - Latent gain per occupant (BTU/h)
/// * `mode` - Operating mode
pub fn latent_load(
    outdoor_temp_f: f64,
    outdoor_rh_pct: f64,
    infiltration_cfm: f64,
    occupants: u32,
    latent_per_person: f64,
    mode: Mode,
) -> LatentLoad {
    let w_outdoor = humidity_ratio_sea_level(outdoor_temp_f, outdoor_rh_pct);
    let w_indoor = humidity_ratio_sea_level(INDOOR_SETPOINT_F, INDOOR_RH_PCT);
    let mass_flow_lb_h = dry_air_mass_flow_lb_h(infiltration_cfm);

    let moisture_delta = match mode {
        Mode::Cooling => (w_outdoor - w_indoor).max(0.0),
        Mode::Heating => (w_indoor - w_outdoor).max(0.0),
    };
    let infiltration_btu_h = (mass_flow_lb_h * moisture_delta * LATENT_HEAT_BTU_LB).max(0.0);

    let occupant_btu_h = match mode {
        Mode::Cooling => f64::from(occupants) * latent_per_person,
        Mode::Heating => 0.0,
    };

    LatentLoad {
        w_outdoor,
        w_indoor,
        mass_flow_lb_h,
        infiltration_btu_h,
        occupant_btu_h,
        total_btu_h: infiltration_btu_h + occupant_btu_h,
    }
}
