use super::recommendation::{HeatRiskTier, UrgencyTier};
use super::weather::WeatherSource;
use crate::error::{IrriplanError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HORIZON_DAYS: u32 = 7;
pub const MAX_HORIZON_DAYS: u32 = 30;

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(IrriplanError::InvalidInput(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(IrriplanError::InvalidInput(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    pub crop_name: String,
    pub area_m2: f64,
    pub irrigation_method: String,
    pub soil_type: String,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

impl PlanRequest {
    pub fn new(
        latitude: f64,
        longitude: f64,
        crop_name: impl Into<String>,
        area_m2: f64,
        irrigation_method: impl Into<String>,
        soil_type: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            location_name: None,
            crop_name: crop_name.into(),
            area_m2,
            irrigation_method: irrigation_method.into(),
            soil_type: soil_type.into(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }

    pub fn with_horizon(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Reject requests that cannot produce a meaningful plan
    pub fn validate(&self) -> Result<Location> {
        let location = Location::new(self.latitude, self.longitude)?;

        if !self.area_m2.is_finite() || self.area_m2 < 0.0 {
            return Err(IrriplanError::InvalidInput(format!(
                "area {} m² must be a non-negative number",
                self.area_m2
            )));
        }
        if self.crop_name.trim().is_empty() {
            return Err(IrriplanError::InvalidInput(
                "crop name must not be empty".into(),
            ));
        }
        if !(1..=MAX_HORIZON_DAYS).contains(&self.horizon_days) {
            return Err(IrriplanError::InvalidInput(format!(
                "horizon of {} days is outside 1..={}",
                self.horizon_days, MAX_HORIZON_DAYS
            )));
        }

        Ok(location)
    }

    pub fn display_location(&self) -> String {
        match self.location_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }

    pub fn hectares(&self) -> f64 {
        self.area_m2 / 10_000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Et0Source {
    Reference,
    Estimated,
}

impl Et0Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Et0Source::Reference => "reference",
            Et0Source::Estimated => "estimated",
        }
    }
}

impl std::fmt::Display for Et0Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    pub et0_mm: f64,
    pub et0_source: Et0Source,
    pub rainfall_mm: f64,
    pub net_liters: f64,
    pub gross_liters: f64,
    pub duration_minutes: u32,
    pub time_of_day: NaiveTime,
    pub heat_index_c: f64,
    pub heat_risk: HeatRiskTier,
    pub urgency: UrgencyTier,
    pub water_saved_liters: f64,
    pub weather_source: WeatherSource,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_gross_liters: f64,
    pub total_duration_minutes: u64,
    pub average_et0_mm: f64,
    pub irrigation_days: usize,
    pub peak_heat_risk: HeatRiskTier,
}

impl PlanSummary {
    pub fn from_days(days: &[DayPlan]) -> Self {
        let total_gross_liters = days.iter().map(|d| d.gross_liters).sum();
        let total_duration_minutes = days.iter().map(|d| u64::from(d.duration_minutes)).sum();
        let average_et0_mm = if days.is_empty() {
            0.0
        } else {
            days.iter().map(|d| d.et0_mm).sum::<f64>() / days.len() as f64
        };
        let irrigation_days = days.iter().filter(|d| d.gross_liters > 0.0).count();
        let peak_heat_risk = days
            .iter()
            .map(|d| d.heat_risk)
            .max()
            .unwrap_or(HeatRiskTier::Low);

        Self {
            total_gross_liters,
            total_duration_minutes,
            average_et0_mm,
            irrigation_days,
            peak_heat_risk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationPlan {
    pub location_name: String,
    pub location: Location,
    pub crop: String,
    pub area_m2: f64,
    pub method: String,
    pub soil_type: String,
    pub days: Vec<DayPlan>,
    pub generated_at: DateTime<Utc>,
    pub total_water_saved_liters: f64,
    pub summary: PlanSummary,
}
