use super::demand::{gross_requirement, net_water_liters};
use super::evapotranspiration::resolve_et0;
use super::heat_risk::{self, classify, heat_index};
use super::scheduling::{duration_minutes, irrigation_time};
use super::scoring::{RecommendationScorer, ScoringInput};
use crate::error::{IrriplanError, Result};
use crate::models::{
    AgronomyTables, CropProfile, DailyWeather, DayPlan, Et0Source, HeatAlert, HeatRiskTier,
    IrrigationPlan, Location, MethodProfile, PlanRequest, PlanSummary, RecommendationResult,
    ReferenceEt0, WeatherSnapshot, WeatherSource, MAX_HORIZON_DAYS,
};
use chrono::Utc;

/// A reference ET0 further than this (degrees) from the field is ignored
pub const REFERENCE_MAX_OFFSET_DEG: f64 = 0.5;

/// Field parameters resolved once per request
struct Field {
    crop: CropProfile,
    soil_factor: f64,
    method: MethodProfile,
    area_m2: f64,
}

/// Builds day-by-day irrigation plans.
///
/// Holds only immutable lookup tables, so one generator can serve any
/// number of requests concurrently.
pub struct PlanGenerator {
    tables: AgronomyTables,
    scorer: RecommendationScorer,
}

impl PlanGenerator {
    pub fn new(tables: AgronomyTables) -> Self {
        Self {
            tables,
            scorer: RecommendationScorer::new(),
        }
    }

    pub fn tables(&self) -> &AgronomyTables {
        &self.tables
    }

    pub fn generate(
        &self,
        request: &PlanRequest,
        weather: &WeatherSnapshot,
        reference: Option<&ReferenceEt0>,
    ) -> Result<IrrigationPlan> {
        let location = request.validate()?;
        validate_current_weather(weather)?;

        let field = Field {
            crop: self.tables.crop(&request.crop_name),
            soil_factor: self.tables.soil_factor(&request.soil_type),
            method: self.tables.method(&request.irrigation_method),
            area_m2: request.area_m2,
        };
        let reference = reference.filter(|r| reference_applies(r, &location));

        let days: Vec<DayPlan> = weather
            .resolve_days(request.horizon_days)
            .iter()
            .map(|day| self.plan_day(&field, day, reference))
            .collect();

        let total_water_saved_liters = days.iter().map(|d| d.water_saved_liters).sum();
        let summary = PlanSummary::from_days(&days);

        tracing::info!(
            crop = %field.crop.name,
            days = days.len(),
            total_gross_liters = summary.total_gross_liters,
            total_water_saved_liters,
            "Generated irrigation plan"
        );

        Ok(IrrigationPlan {
            location_name: request.display_location(),
            location,
            crop: field.crop.name.clone(),
            area_m2: request.area_m2,
            method: field.method.name.clone(),
            soil_type: request.soil_type.trim().to_lowercase(),
            days,
            generated_at: Utc::now(),
            total_water_saved_liters,
            summary,
        })
    }

    /// Urgency recommendation for a single day's conditions
    pub fn recommend(
        &self,
        crop_name: &str,
        area_m2: f64,
        day: &DailyWeather,
        et0_mm: f64,
    ) -> Result<RecommendationResult> {
        if crop_name.trim().is_empty() {
            return Err(IrriplanError::InvalidInput(
                "crop name must not be empty".into(),
            ));
        }
        if !area_m2.is_finite() || area_m2 < 0.0 {
            return Err(IrriplanError::InvalidInput(format!(
                "area {} m² must be a non-negative number",
                area_m2
            )));
        }

        let crop = self.tables.crop(crop_name);
        let input = scoring_input(day, et0_mm, &crop);
        Ok(self.scorer.recommend(&input, &crop, area_m2 / 10_000.0))
    }

    /// Heat alerts over the forecast horizon
    pub fn heat_alerts(
        &self,
        weather: &WeatherSnapshot,
        horizon_days: u32,
    ) -> Result<Vec<HeatAlert>> {
        if !(1..=MAX_HORIZON_DAYS).contains(&horizon_days) {
            return Err(IrriplanError::InvalidInput(format!(
                "horizon of {} days is outside 1..={}",
                horizon_days, MAX_HORIZON_DAYS
            )));
        }
        validate_current_weather(weather)?;
        Ok(heat_risk::heat_alerts(&weather.resolve_days(horizon_days)))
    }

    fn plan_day(
        &self,
        field: &Field,
        day: &DailyWeather,
        reference: Option<&ReferenceEt0>,
    ) -> DayPlan {
        let (et0_mm, et0_source) = resolve_et0(
            day.date,
            reference,
            day.temp_c,
            day.humidity_pct,
            day.wind_speed_ms,
            day.uv_index,
        );

        let net_liters = net_water_liters(
            field.crop.water_per_m2_day,
            field.area_m2,
            day.temp_c,
            day.humidity_pct,
        );
        let requirement = gross_requirement(
            net_liters,
            field.soil_factor,
            field.method.efficiency,
            day.rainfall_mm,
            field.area_m2,
        );
        let gross_liters = requirement.gross_liters;

        // Naive schedule: uncorrected crop demand pumped every day
        let baseline_liters =
            field.crop.water_per_m2_day * field.area_m2 / field.method.efficiency;
        let water_saved_liters = (baseline_liters - gross_liters).max(0.0);

        let heat_risk = classify(day.temp_c);
        let urgency = self.scorer.tier(&scoring_input(day, et0_mm, &field.crop));

        let mut notes = Vec::new();
        match day.source {
            WeatherSource::Repeated => notes.push(
                "No forecast for this day; current conditions were repeated.".to_string(),
            ),
            WeatherSource::Partial => notes.push(
                "Forecast incomplete; missing values taken from current conditions.".to_string(),
            ),
            WeatherSource::Current | WeatherSource::Forecast => {}
        }
        notes.push(match et0_source {
            Et0Source::Reference => format!("ET0 {:.1} mm/day from reference data.", et0_mm),
            Et0Source::Estimated => {
                format!("ET0 {:.1} mm/day estimated from local weather.", et0_mm)
            }
        });
        if requirement.covered_by_rain() {
            notes.push(format!(
                "Rainfall of {:.1} mm covers the crop demand; no irrigation needed.",
                day.rainfall_mm
            ));
        }
        if heat_risk > HeatRiskTier::Low {
            notes.push(format!("{} heat risk: {}", heat_risk, heat_risk.recommendation()));
        }

        tracing::debug!(
            date = %day.date,
            et0_mm,
            net_liters,
            gross_liters,
            %urgency,
            "Planned irrigation day"
        );

        DayPlan {
            date: day.date,
            et0_mm,
            et0_source,
            rainfall_mm: day.rainfall_mm,
            net_liters,
            gross_liters,
            duration_minutes: duration_minutes(gross_liters, field.method.flow_rate_lpm),
            time_of_day: irrigation_time(day.temp_c),
            heat_index_c: heat_index(day.temp_c, day.humidity_pct),
            heat_risk,
            urgency,
            water_saved_liters,
            weather_source: day.source,
            notes,
        }
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(AgronomyTables::default())
    }
}

fn scoring_input(day: &DailyWeather, et0_mm: f64, crop: &CropProfile) -> ScoringInput {
    ScoringInput {
        temp_c: day.temp_c,
        humidity_pct: day.humidity_pct,
        rainfall_mm: day.rainfall_window_mm(),
        et0_mm,
        et_threshold_mm: crop.et_threshold_mm,
    }
}

fn reference_applies(reference: &ReferenceEt0, location: &Location) -> bool {
    let near = (reference.latitude - location.latitude).abs() <= REFERENCE_MAX_OFFSET_DEG
        && (reference.longitude - location.longitude).abs() <= REFERENCE_MAX_OFFSET_DEG;
    if !near {
        tracing::warn!(
            reference_lat = reference.latitude,
            reference_lon = reference.longitude,
            "Reference ET0 is for a different location, using local estimate"
        );
    }
    near
}

/// Without usable current-day values there is nothing to fall back on
fn validate_current_weather(weather: &WeatherSnapshot) -> Result<()> {
    let fields = [
        ("temperature", weather.temp_c),
        ("humidity", weather.humidity_pct),
        ("rainfall", weather.rainfall_mm),
        ("wind speed", weather.wind_speed_ms),
        ("UV index", weather.uv_index),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(IrriplanError::InvalidInput(format!(
                "current-day {} is missing or not a number",
                name
            )));
        }
    }
    Ok(())
}
