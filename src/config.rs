use crate::error::{IrriplanError, Result};
use crate::models::{AgronomyTables, CropProfile, MethodProfile, DEFAULT_HORIZON_DAYS};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Extra or overriding crop profiles
    #[serde(default)]
    pub crops: Vec<CropProfile>,
    /// Extra or overriding soil factors, keyed by soil name
    #[serde(default)]
    pub soils: BTreeMap<String, f64>,
    /// Extra or overriding irrigation methods
    #[serde(default)]
    pub methods: Vec<MethodProfile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the first config found in the
    /// standard locations. No config file at all means built-in defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(IrriplanError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using built-in tables");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| IrriplanError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::info!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML content, substituting `${VAR}` references first
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);
        serde_yaml::from_str(&content)
            .map_err(|e| IrriplanError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search config/config.yaml, then the XDG config directory
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("irriplan").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Built-in lookup tables extended with this config's entries
    pub fn tables(&self) -> Result<AgronomyTables> {
        let mut tables = AgronomyTables::default();
        for crop in &self.crops {
            tables.insert_crop(crop.clone())?;
        }
        for (name, factor) in &self.soils {
            tables.insert_soil(name, *factor)?;
        }
        for method in &self.methods {
            tables.insert_method(method.clone())?;
        }
        Ok(tables)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.defaults.horizon_days, DEFAULT_HORIZON_DAYS);
        assert_eq!(config.defaults.output, OutputFormat::Text);
        assert!(config.crops.is_empty());
    }

    #[test]
    fn config_extends_tables() {
        let yaml = "
defaults:
  horizon_days: 5
  output: json
crops:
  - name: Sorghum
    waterPerM2Day: 4.5
    waterPerHectareDay: 4500
    etThresholdMm: 4.5
soils:
  peat: 1.1
methods:
  - name: micro-spray
    efficiency: 0.85
    flowRateLpm: 30
";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.defaults.horizon_days, 5);
        assert_eq!(config.defaults.output, OutputFormat::Json);

        let tables = config.tables().unwrap();
        assert!(tables.has_crop("sorghum"));
        assert!(tables.has_crop("tomato"));
        assert_eq!(tables.soil_factor("peat"), 1.1);
        assert_eq!(tables.method("micro-spray").efficiency, 0.85);
    }

    #[test]
    fn invalid_soil_factor_rejected() {
        let config = Config::parse("soils:\n  bog: 2.0\n").unwrap();
        assert!(matches!(config.tables(), Err(IrriplanError::Config(_))));
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("IRRIPLAN_TEST_HORIZON", "3");
        let yaml = "defaults:\n  horizon_days: ${IRRIPLAN_TEST_HORIZON}\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.defaults.horizon_days, 3);
    }

    #[test]
    fn missing_override_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/irriplan.yaml")));
        assert!(matches!(result, Err(IrriplanError::Config(_))));
    }
}
