use crate::error::{IrriplanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Soil and method factors must stay inside (0, MAX_FACTOR]
pub const MAX_FACTOR: f64 = 1.2;

pub const DEFAULT_SOIL_FACTOR: f64 = 1.0;
pub const DEFAULT_METHOD: &str = "sprinkler";

/// Lookup keys are trimmed and lower-cased
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    pub name: String,
    /// Liters per m² per day, used for the field demand model
    pub water_per_m2_day: f64,
    /// Liters per hectare per day, used for the water-saved baseline
    pub water_per_hectare_day: f64,
    /// ET0 (mm/day) above which the crop is assumed to be stressed
    pub et_threshold_mm: f64,
}

impl CropProfile {
    pub fn new(
        name: impl Into<String>,
        water_per_m2_day: f64,
        water_per_hectare_day: f64,
        et_threshold_mm: f64,
    ) -> Self {
        Self {
            name: name.into(),
            water_per_m2_day,
            water_per_hectare_day,
            et_threshold_mm,
        }
    }

    /// Profile used when a crop name is not in the table
    pub fn fallback(name: &str) -> Self {
        Self::new(name.trim(), 5.0, 5000.0, 5.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodProfile {
    pub name: String,
    /// Fraction of pumped water that reaches the root zone
    pub efficiency: f64,
    pub flow_rate_lpm: f64,
}

impl MethodProfile {
    pub fn new(name: impl Into<String>, efficiency: f64, flow_rate_lpm: f64) -> Self {
        Self {
            name: name.into(),
            efficiency,
            flow_rate_lpm,
        }
    }
}

/// Crop, soil and irrigation-method lookup tables.
///
/// Unknown names never fail: crops fall back to [`CropProfile::fallback`],
/// soils to a factor of 1.0 and methods to sprinkler values.
#[derive(Debug, Clone)]
pub struct AgronomyTables {
    crops: HashMap<String, CropProfile>,
    soils: HashMap<String, f64>,
    methods: HashMap<String, MethodProfile>,
}

impl AgronomyTables {
    pub fn empty() -> Self {
        Self {
            crops: HashMap::new(),
            soils: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    pub fn insert_crop(&mut self, profile: CropProfile) -> Result<()> {
        let key = normalize_key(&profile.name);
        if key.is_empty() {
            return Err(IrriplanError::Config("crop name must not be empty".into()));
        }
        if !(profile.water_per_m2_day >= 0.0
            && profile.water_per_hectare_day >= 0.0
            && profile.et_threshold_mm > 0.0)
        {
            return Err(IrriplanError::Config(format!(
                "crop '{}' needs non-negative water demand and a positive ET threshold",
                profile.name
            )));
        }
        self.crops.insert(key, profile);
        Ok(())
    }

    pub fn insert_soil(&mut self, name: &str, factor: f64) -> Result<()> {
        if !(factor > 0.0 && factor <= MAX_FACTOR) {
            return Err(IrriplanError::Config(format!(
                "soil '{}' factor {} is outside (0, {}]",
                name, factor, MAX_FACTOR
            )));
        }
        self.soils.insert(normalize_key(name), factor);
        Ok(())
    }

    pub fn insert_method(&mut self, profile: MethodProfile) -> Result<()> {
        if !(profile.efficiency > 0.0 && profile.efficiency <= MAX_FACTOR) {
            return Err(IrriplanError::Config(format!(
                "method '{}' efficiency {} is outside (0, {}]",
                profile.name, profile.efficiency, MAX_FACTOR
            )));
        }
        if !(profile.flow_rate_lpm > 0.0) {
            return Err(IrriplanError::Config(format!(
                "method '{}' flow rate must be positive",
                profile.name
            )));
        }
        self.methods.insert(normalize_key(&profile.name), profile);
        Ok(())
    }

    pub fn has_crop(&self, name: &str) -> bool {
        self.crops.contains_key(&normalize_key(name))
    }

    pub fn has_soil(&self, name: &str) -> bool {
        self.soils.contains_key(&normalize_key(name))
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(&normalize_key(name))
    }

    pub fn crop(&self, name: &str) -> CropProfile {
        match self.crops.get(&normalize_key(name)) {
            Some(profile) => profile.clone(),
            None => {
                tracing::info!(crop = %name, "Unknown crop, using default profile");
                CropProfile::fallback(name)
            }
        }
    }

    pub fn soil_factor(&self, name: &str) -> f64 {
        match self.soils.get(&normalize_key(name)) {
            Some(factor) => *factor,
            None => {
                tracing::info!(soil = %name, "Unknown soil type, using factor 1.0");
                DEFAULT_SOIL_FACTOR
            }
        }
    }

    pub fn method(&self, name: &str) -> MethodProfile {
        if let Some(profile) = self.methods.get(&normalize_key(name)) {
            return profile.clone();
        }
        tracing::info!(method = %name, "Unknown irrigation method, using sprinkler values");
        self.methods
            .get(DEFAULT_METHOD)
            .cloned()
            .unwrap_or_else(|| MethodProfile::new(DEFAULT_METHOD, 0.75, 50.0))
    }

    /// Crops sorted by name
    pub fn crops(&self) -> Vec<&CropProfile> {
        let mut crops: Vec<&CropProfile> = self.crops.values().collect();
        crops.sort_by(|a, b| a.name.cmp(&b.name));
        crops
    }

    /// Soils sorted by name
    pub fn soils(&self) -> Vec<(&str, f64)> {
        let mut soils: Vec<(&str, f64)> =
            self.soils.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        soils.sort_by(|a, b| a.0.cmp(b.0));
        soils
    }

    /// Methods sorted by name
    pub fn methods(&self) -> Vec<&MethodProfile> {
        let mut methods: Vec<&MethodProfile> = self.methods.values().collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }
}

impl Default for AgronomyTables {
    fn default() -> Self {
        let crops = [
            CropProfile::new("tomato", 6.5, 5500.0, 5.5),
            CropProfile::new("cucumber", 7.0, 6000.0, 6.0),
            CropProfile::new("lettuce", 3.5, 3500.0, 3.5),
            CropProfile::new("pepper", 5.5, 5000.0, 5.0),
            CropProfile::new("wheat", 4.0, 4000.0, 4.0),
            CropProfile::new("corn", 8.0, 6500.0, 6.5),
            CropProfile::new("rice", 12.0, 8000.0, 7.0),
        ];
        let soils = [("sandy", 1.15), ("clay", 0.85), ("loam", 1.0), ("silt", 0.95)];
        let methods = [
            MethodProfile::new("drip", 0.90, 18.0),
            MethodProfile::new("sprinkler", 0.75, 50.0),
            MethodProfile::new("flood", 0.50, 200.0),
        ];

        Self {
            crops: crops
                .into_iter()
                .map(|c| (normalize_key(&c.name), c))
                .collect(),
            soils: soils
                .into_iter()
                .map(|(name, factor)| (name.to_string(), factor))
                .collect(),
            methods: methods
                .into_iter()
                .map(|m| (normalize_key(&m.name), m))
                .collect(),
        }
    }
}
