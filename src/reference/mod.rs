//! Static reference data: climate, construction, equipment and occupant presets.
//!
//! Every table is a process-wide immutable `static`. Unknown keys never fail;
//! each table carries its own documented fallback (see [`ReferenceTable`]).

mod table;

pub use table::{Fallback, ReferenceTable, Resolved};

use serde::Serialize;

/// Outdoor design conditions for a city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Climate {
    /// Outdoor dry-bulb temperature (°F).
    pub temp_f: f64,
    /// Outdoor relative humidity (%).
    pub rh_pct: f64,
}

const fn climate(temp_f: f64, rh_pct: f64) -> Climate {
    Climate { temp_f, rh_pct }
}

/// City used when the requested city is unknown.
pub const DEFAULT_CITY: &str = "Chicago";
/// Building type used when the requested type is unknown.
pub const DEFAULT_BUILDING_TYPE: &str = "Office";
/// HVAC system used when the requested system is unknown.
pub const DEFAULT_HVAC_SYSTEM: &str = "Rooftop Unit";
/// Insulation level used when the requested level is unknown.
pub const DEFAULT_INSULATION: &str = "Medium";
/// Occupant latent gain applied for a blank or unknown preset (BTU/h per person).
pub const DEFAULT_OCCUPANT_LATENT_BTU_H: f64 = 200.0;

/// City → outdoor design conditions.
pub static CITIES: ReferenceTable<Climate> = ReferenceTable {
    name: "city",
    entries: &[
        ("Chicago", climate(50.0, 70.0)),
        ("Miami", climate(75.0, 75.0)),
        ("Dallas", climate(65.0, 65.0)),
        ("Los Angeles", climate(64.0, 65.0)),
        ("New York", climate(55.0, 70.0)),
        ("Seattle", climate(52.0, 80.0)),
        ("Phoenix", climate(77.0, 35.0)),
        ("Atlanta", climate(63.0, 68.0)),
        ("Denver", climate(50.0, 55.0)),
        ("Boston", climate(51.0, 66.0)),
        ("San Francisco", climate(59.0, 75.0)),
    ],
    fallback: Fallback::Entry(DEFAULT_CITY),
};

/// Building type → base envelope load (BTU/h per ft² per °F of delta).
pub static BUILDING_BASE_LOAD: ReferenceTable<f64> = ReferenceTable {
    name: "building_type",
    entries: &[
        ("Office", 30.0),
        ("Retail", 35.0),
        ("Warehouse", 20.0),
        ("Data Center", 50.0),
    ],
    fallback: Fallback::Entry(DEFAULT_BUILDING_TYPE),
};

/// Insulation level → envelope multiplier.
pub static INSULATION_FACTOR: ReferenceTable<f64> = ReferenceTable {
    name: "insulation_level",
    entries: &[("Low", 1.2), ("Medium", 1.0), ("High", 0.8)],
    fallback: Fallback::Entry(DEFAULT_INSULATION),
};

/// HVAC system type → default coefficient of performance.
pub static HVAC_SYSTEM_COP: ReferenceTable<f64> = ReferenceTable {
    name: "hvac_system",
    entries: &[
        ("Rooftop Unit", 3.0),
        ("Chiller", 4.0),
        ("Heat Pump", 3.5),
        ("VRF System", 4.5),
        ("Geothermal HP", 4.0),
        ("DX Split System", 3.2),
    ],
    fallback: Fallback::Entry(DEFAULT_HVAC_SYSTEM),
};

/// Infiltration preset → airflow per floor area (CFM/ft²), approximately ASHRAE-based.
///
/// An unknown preset contributes no infiltration at all.
pub static INFILTRATION_PRESETS: ReferenceTable<f64> = ReferenceTable {
    name: "infiltration_preset",
    entries: &[
        ("Low (Tight Building)", 0.04),
        ("Medium", 0.09),
        ("High (Leaky Building)", 0.18),
    ],
    fallback: Fallback::Value(0.0),
};

/// Occupant activity preset → latent heat per occupant (BTU/h).
pub static OCCUPANT_LATENT_PRESETS: ReferenceTable<f64> = ReferenceTable {
    name: "occupant_latent_preset",
    entries: &[
        ("Low Activity (Seated, Quiet)", 150.0),
        ("Medium Activity (Typical Office/Retail)", 200.0),
        ("High Activity (Active, Light Exercise)", 300.0),
    ],
    fallback: Fallback::Value(DEFAULT_OCCUPANT_LATENT_BTU_H),
};

/// Fixed occupant sensible gain (BTU/h per occupant).
pub const OCCUPANT_SENSIBLE_GAIN_BTU_H: f64 = 350.0;
/// Indoor dry-bulb setpoint (°F).
pub const INDOOR_SETPOINT_F: f64 = 72.0;
/// Indoor relative humidity (%).
pub const INDOOR_RH_PCT: f64 = 50.0;
/// Energy conversion: BTU per kWh.
pub const BTU_PER_KWH: f64 = 3412.0;
