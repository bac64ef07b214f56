use crate::error::{IrriplanError, Result};
use crate::models::{PlanRequest, ReferenceEt0, WeatherSnapshot};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Serialization format of an input file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("yaml") | Some("yml") => Ok(DataFormat::Yaml),
            _ => Err(IrriplanError::UnsupportedFormat(format!(
                "{} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            DataFormat::Json => Ok(serde_json::from_str(content)?),
            DataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DataFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "Loading input file");
    format.parse(&content)
}

/// Weather snapshot exported by a weather provider
pub fn load_weather(path: &Path) -> Result<WeatherSnapshot> {
    load(path)
}

pub fn load_reference_et0(path: &Path) -> Result<ReferenceEt0> {
    load(path)
}

pub fn load_plan_request(path: &Path) -> Result<PlanRequest> {
    load(path)
}
