//! Building scenarios: TOML loading, named presets and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::calc::types::CalcInput;
use crate::reference::{
    BUILDING_BASE_LOAD, CITIES, DEFAULT_BUILDING_TYPE, DEFAULT_CITY, DEFAULT_HVAC_SYSTEM,
    DEFAULT_INSULATION, HVAC_SYSTEM_COP, INFILTRATION_PRESETS, INSULATION_FACTOR,
    OCCUPANT_LATENT_PRESETS,
};

/// One building scenario, as read from a TOML file or a preset.
///
/// All fields have defaults. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Location.
    #[serde(default)]
    pub site: SiteConfig,
    /// Construction and occupancy.
    #[serde(default)]
    pub building: BuildingConfig,
    /// HVAC equipment.
    #[serde(default)]
    pub hvac: HvacConfig,
    /// Electricity tariff.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// Air leakage.
    #[serde(default)]
    pub infiltration: InfiltrationConfig,
    /// Occupant activity.
    #[serde(default)]
    pub occupants: OccupantConfig,
}

/// Location parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// City key into the climate table.
    pub city: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Construction and occupancy parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingConfig {
    /// Building type key.
    pub building_type: String,
    /// Floor area (ft², >= 0).
    pub area_ft2: f64,
    /// Window area term (>= 0).
    pub window_area: f64,
    /// Insulation level key.
    pub insulation_level: String,
    /// Number of occupants.
    pub occupancy_count: u32,
    /// Number of tenancies (must be > 0).
    pub num_tenancies: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            building_type: DEFAULT_BUILDING_TYPE.to_string(),
            area_ft2: 1000.0,
            window_area: 0.0,
            insulation_level: DEFAULT_INSULATION.to_string(),
            occupancy_count: 10,
            num_tenancies: 1,
        }
    }
}

/// HVAC equipment parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HvacConfig {
    /// HVAC system key.
    pub system: String,
    /// COP override; 0 means "use the table default".
    pub cop_override: f64,
    /// Capital cost ($, >= 0).
    pub capital_cost: f64,
    /// Expected lifespan (years, >= 1).
    pub lifespan_years: f64,
    /// Annual operating hours (>= 1).
    pub annual_operating_hours: f64,
}

impl Default for HvacConfig {
    fn default() -> Self {
        Self {
            system: DEFAULT_HVAC_SYSTEM.to_string(),
            cop_override: 0.0,
            capital_cost: 5000.0,
            lifespan_years: 15.0,
            annual_operating_hours: 2000.0,
        }
    }
}

/// Electricity tariff.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Price per kWh ($, >= 0).
    pub electric_rate: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            electric_rate: 0.12,
        }
    }
}

/// Air leakage parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfiltrationConfig {
    /// Preset key; ignored when `custom_cfm` > 0.
    pub preset: String,
    /// Custom airflow (CFM, >= 0).
    pub custom_cfm: f64,
}

impl Default for InfiltrationConfig {
    fn default() -> Self {
        Self {
            preset: "Medium".to_string(),
            custom_cfm: 0.0,
        }
    }
}

/// Occupant activity parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OccupantConfig {
    /// Latent preset key.
    pub latent_preset: String,
}

impl Default for OccupantConfig {
    fn default() -> Self {
        Self {
            latent_preset: "Medium Activity (Typical Office/Retail)".to_string(),
        }
    }
}

/// A scenario problem, tagged with the dotted path of the offending field.
#[derive(Debug, Error)]
#[error("config error: {field} — {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"building.area_ft2"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a 1000 ft² Chicago office in heating mode.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the retail-Miami preset: humid cooling with shared tenancy.
    pub fn retail_miami() -> Self {
        Self {
            site: SiteConfig {
                city: "Miami".to_string(),
            },
            building: BuildingConfig {
                building_type: "Retail".to_string(),
                area_ft2: 2500.0,
                window_area: 20.0,
                occupancy_count: 40,
                num_tenancies: 4,
                ..BuildingConfig::default()
            },
            hvac: HvacConfig {
                system: "Heat Pump".to_string(),
                capital_cost: 18_000.0,
                annual_operating_hours: 3500.0,
                ..HvacConfig::default()
            },
            tariff: TariffConfig {
                electric_rate: 0.14,
            },
            infiltration: InfiltrationConfig {
                preset: "High (Leaky Building)".to_string(),
                ..InfiltrationConfig::default()
            },
            occupants: OccupantConfig {
                latent_preset: "High Activity (Active, Light Exercise)".to_string(),
            },
        }
    }

    /// Returns the data-center-Phoenix preset: dry cooling, high-COP plant.
    pub fn data_center_phoenix() -> Self {
        Self {
            site: SiteConfig {
                city: "Phoenix".to_string(),
            },
            building: BuildingConfig {
                building_type: "Data Center".to_string(),
                area_ft2: 5000.0,
                insulation_level: "High".to_string(),
                occupancy_count: 6,
                num_tenancies: 2,
                ..BuildingConfig::default()
            },
            hvac: HvacConfig {
                system: "Chiller".to_string(),
                capital_cost: 250_000.0,
                lifespan_years: 20.0,
                annual_operating_hours: 8760.0,
                ..HvacConfig::default()
            },
            tariff: TariffConfig {
                electric_rate: 0.10,
            },
            infiltration: InfiltrationConfig {
                preset: "Low (Tight Building)".to_string(),
                ..InfiltrationConfig::default()
            },
            occupants: OccupantConfig {
                latent_preset: "Low Activity (Seated, Quiet)".to_string(),
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "retail_miami", "data_center_phoenix"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "retail_miami" => Ok(Self::retail_miami()),
            "data_center_phoenix" => Ok(Self::data_center_phoenix()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all numeric fields and returns a list of errors.
    ///
    /// Unknown reference keys are not errors (they fall back to defaults);
    /// see [`ScenarioConfig::unknown_keys`].
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let b = &self.building;
        if !(b.area_ft2 >= 0.0) {
            errors.push(ConfigError::new("building.area_ft2", "must be >= 0"));
        }
        if !(b.window_area >= 0.0) {
            errors.push(ConfigError::new("building.window_area", "must be >= 0"));
        }
        if b.num_tenancies == 0 {
            errors.push(ConfigError::new("building.num_tenancies", "must be > 0"));
        }

        let h = &self.hvac;
        if !(h.cop_override >= 0.0) {
            errors.push(ConfigError::new(
                "hvac.cop_override",
                "must be >= 0 (0 uses the system default)",
            ));
        }
        if !(h.capital_cost >= 0.0) {
            errors.push(ConfigError::new("hvac.capital_cost", "must be >= 0"));
        }
        if !(h.lifespan_years >= 1.0) {
            errors.push(ConfigError::new("hvac.lifespan_years", "must be >= 1"));
        }
        if !(h.annual_operating_hours >= 1.0) {
            errors.push(ConfigError::new(
                "hvac.annual_operating_hours",
                "must be >= 1",
            ));
        }

        if !(self.tariff.electric_rate >= 0.0) {
            errors.push(ConfigError::new("tariff.electric_rate", "must be >= 0"));
        }
        if !(self.infiltration.custom_cfm >= 0.0) {
            errors.push(ConfigError::new("infiltration.custom_cfm", "must be >= 0"));
        }

        errors
    }

    /// Reference keys that are not in their tables, as `(field, key)` pairs.
    ///
    /// A blank infiltration preset means "no preset" and is not reported.
    pub fn unknown_keys(&self) -> Vec<(&'static str, &str)> {
        let checks = [
            ("site.city", self.site.city.as_str(), CITIES.contains(&self.site.city)),
            (
                "building.building_type",
                self.building.building_type.as_str(),
                BUILDING_BASE_LOAD.contains(&self.building.building_type),
            ),
            (
                "building.insulation_level",
                self.building.insulation_level.as_str(),
                INSULATION_FACTOR.contains(&self.building.insulation_level),
            ),
            (
                "hvac.system",
                self.hvac.system.as_str(),
                HVAC_SYSTEM_COP.contains(&self.hvac.system),
            ),
            (
                "infiltration.preset",
                self.infiltration.preset.as_str(),
                self.infiltration.preset.is_empty()
                    || INFILTRATION_PRESETS.contains(&self.infiltration.preset),
            ),
            (
                "occupants.latent_preset",
                self.occupants.latent_preset.as_str(),
                OCCUPANT_LATENT_PRESETS.contains(&self.occupants.latent_preset),
            ),
        ];

        checks
            .into_iter()
            .filter(|(_, _, known)| !known)
            .map(|(field, key, _)| (field, key))
            .collect()
    }

    /// Builds the normalized calculation input for this scenario.
    pub fn to_input(&self) -> CalcInput {
        CalcInput {
            city: self.site.city.clone(),
            building_type: self.building.building_type.clone(),
            area_ft2: self.building.area_ft2,
            window_area: self.building.window_area,
            num_tenancies: self.building.num_tenancies,
            electric_rate: self.tariff.electric_rate,
            hvac_system: self.hvac.system.clone(),
            cop_override: self.hvac.cop_override,
            insulation_level: self.building.insulation_level.clone(),
            occupancy_count: self.building.occupancy_count,
            hvac_capital_cost: self.hvac.capital_cost,
            hvac_lifespan_years: self.hvac.lifespan_years,
            annual_operating_hours: self.hvac.annual_operating_hours,
            infiltration_preset: self.infiltration.preset.clone(),
            infiltration_cfm: self.infiltration.custom_cfm,
            occupant_latent_preset: self.occupants.latent_preset.clone(),
        }
        .normalized()
    }
}
