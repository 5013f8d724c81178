//! Simplified psychrometrics: saturation pressure and humidity ratio.
//!
//! A Buck-type approximation, adequate for comfort-range air. Not intended
//! for ASHRAE-grade property evaluation.

/// Standard atmospheric pressure (kPa per atm).
pub const KPA_PER_ATM: f64 = 101.325;

/// Ratio of molecular weights of water vapor and dry air.
const MOLECULAR_WEIGHT_RATIO: f64 = 0.622;

/// Upper bound on the vapor partial pressure as a fraction of total pressure.
const MAX_VAPOR_FRACTION: f64 = 0.99;

/// Converts a Fahrenheit temperature to Celsius.
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Saturation vapor pressure of water (kPa) at the given dry-bulb temperature.
///
/// `psat = 0.61121 · exp((18.678 − Tc/234.5) · (Tc / (257.14 + Tc)))`
///
/// # Examples
///
/// ```
/// use hvac_cost::calc::psychro::saturation_pressure_kpa;
///
/// // At the freezing point the exponent vanishes.
/// assert!((saturation_pressure_kpa(32.0) - 0.61121).abs() < 1e-12);
/// ```
pub fn saturation_pressure_kpa(temp_f: f64) -> f64 {
    let t_c = fahrenheit_to_celsius(temp_f);
    0.61121 * ((18.678 - t_c / 234.5) * (t_c / (257.14 + t_c))).exp()
}

/// Humidity ratio (lb water / lb dry air).
///
/// The vapor partial pressure is capped at 99 % of the total pressure so the
/// denominator stays positive.
///
/// # Arguments
///
/// * `temp_f` - Dry-bulb temperature (°F)
/// * `rh_pct` - Relative humidity (%)
/// * `pressure_atm` - Total pressure (atm); `1.0` at sea level
pub fn humidity_ratio(temp_f: f64, rh_pct: f64, pressure_atm: f64) -> f64 {
    let p_total = KPA_PER_ATM * pressure_atm;
    let p_water =
        (rh_pct / 100.0 * saturation_pressure_kpa(temp_f)).min(MAX_VAPOR_FRACTION * p_total);
    MOLECULAR_WEIGHT_RATIO * (p_water / (p_total - p_water))
}

/// Humidity ratio at standard sea-level pressure.
pub fn humidity_ratio_sea_level(temp_f: f64, rh_pct: f64) -> f64 {
    humidity_ratio(temp_f, rh_pct, 1.0)
}
