use crate::error::Result;
use crate::models::{AgronomyTables, HeatAlert, IrrigationPlan, RecommendationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Option<Result<String>> {
    match format {
        OutputFormat::Json => Some(serde_json::to_string_pretty(value).map_err(Into::into)),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value).map_err(Into::into)),
        OutputFormat::Text => None,
    }
}

pub fn render_plan(plan: &IrrigationPlan, format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(plan, format) {
        return out;
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Irrigation plan for {} ({})\n",
        plan.location_name, plan.location
    ));
    out.push_str(&format!(
        "Crop: {}  Area: {:.0} m²  Method: {}  Soil: {}\n\n",
        plan.crop, plan.area_m2, plan.method, plan.soil_type
    ));
    out.push_str(&format!(
        "{:<10}  {:>6}  {:>10}  {:>6}  {:>5}  {:>6}  {:<8}  {:<8}  {:>10}\n",
        "Date", "ET0", "Gross L", "Min", "Start", "HI °C", "Heat", "Urgency", "Saved L"
    ));
    for day in &plan.days {
        out.push_str(&format!(
            "{:<10}  {:>6.1}  {:>10.1}  {:>6}  {:>5}  {:>6.1}  {:<8}  {:<8}  {:>10.1}\n",
            day.date,
            day.et0_mm,
            day.gross_liters,
            day.duration_minutes,
            day.time_of_day.format("%H:%M"),
            day.heat_index_c,
            day.heat_risk.as_str(),
            day.urgency.as_str(),
            day.water_saved_liters
        ));
        for note in &day.notes {
            out.push_str(&format!("    - {}\n", note));
        }
    }

    let summary = &plan.summary;
    out.push_str(&format!(
        "\nTotal: {:.1} L over {} irrigation days, {} minutes, avg ET0 {:.1} mm/day\n",
        summary.total_gross_liters,
        summary.irrigation_days,
        summary.total_duration_minutes,
        summary.average_et0_mm
    ));
    out.push_str(&format!(
        "Water saved vs fixed schedule: {:.1} L  Peak heat risk: {}\n",
        plan.total_water_saved_liters, summary.peak_heat_risk
    ));
    Ok(out)
}

pub fn render_recommendation(
    result: &RecommendationResult,
    format: OutputFormat,
) -> Result<String> {
    if let Some(out) = structured(result, format) {
        return out;
    }

    let mut out = format!("Urgency: {} (score {})\n", result.tier, result.score);
    for c in &result.contributions {
        out.push_str(&format!("  {:+} {}: {}\n", c.points, c.factor, c.clause));
    }
    out.push_str(&format!(
        "Estimated water saved: {:.1} L\n",
        result.water_saved_liters
    ));
    Ok(out)
}

pub fn render_alerts(alerts: &[HeatAlert], format: OutputFormat) -> Result<String> {
    if let Some(out) = structured(&alerts, format) {
        return out;
    }

    if alerts.is_empty() {
        return Ok("No heat alerts in the forecast.\n".to_string());
    }

    let mut out = String::new();
    for alert in alerts {
        out.push_str(&format!(
            "{} {}  {} risk  {:.1}°C (feels like {:.1}°C)\n    {}\n",
            alert.date,
            alert.time.format("%H:%M"),
            alert.risk,
            alert.temperature_c,
            alert.heat_index_c,
            alert.recommendation
        ));
    }
    Ok(out)
}

#[derive(Serialize)]
struct TablesView<'a> {
    crops: Vec<&'a crate::models::CropProfile>,
    soils: Vec<(&'a str, f64)>,
    methods: Vec<&'a crate::models::MethodProfile>,
}

pub fn render_tables(tables: &AgronomyTables, format: OutputFormat) -> Result<String> {
    let view = TablesView {
        crops: tables.crops(),
        soils: tables.soils(),
        methods: tables.methods(),
    };
    if let Some(out) = structured(&view, format) {
        return out;
    }

    let mut out = String::from("Crops (L/m²/day, L/ha/day, ET threshold mm)\n");
    for crop in &view.crops {
        out.push_str(&format!(
            "  {:<12} {:>6.1} {:>8.0} {:>6.1}\n",
            crop.name, crop.water_per_m2_day, crop.water_per_hectare_day, crop.et_threshold_mm
        ));
    }
    out.push_str("Soils (factor)\n");
    for (name, factor) in &view.soils {
        out.push_str(&format!("  {:<12} {:>6.2}\n", name, factor));
    }
    out.push_str("Methods (efficiency, flow L/min)\n");
    for method in &view.methods {
        out.push_str(&format!(
            "  {:<12} {:>6.2} {:>6.0}\n",
            method.name, method.efficiency, method.flow_rate_lpm
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::PlanGenerator;
    use crate::models::{PlanRequest, WeatherSnapshot};
    use chrono::NaiveDate;

    fn plan() -> IrrigationPlan {
        let weather = WeatherSnapshot {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            temp_c: 37.0,
            humidity_pct: 30.0,
            rainfall_mm: 0.0,
            forecast_rainfall_tomorrow_mm: None,
            wind_speed_ms: 2.0,
            uv_index: 8.0,
            daily_forecast: Vec::new(),
        };
        let request =
            PlanRequest::new(12.0, 8.5, "corn", 400.0, "sprinkler", "sandy").with_horizon(2);
        PlanGenerator::default()
            .generate(&request, &weather, None)
            .unwrap()
    }

    #[test]
    fn text_plan_lists_every_day() {
        let text = render_plan(&plan(), OutputFormat::Text).unwrap();
        assert!(text.contains("2024-02-01"));
        assert!(text.contains("2024-02-02"));
        assert!(text.contains("05:00"));
        assert!(text.contains("Peak heat risk: HIGH"));
    }

    #[test]
    fn json_plan_uses_camel_case() {
        let json = render_plan(&plan(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"grossLiters\""));
        assert!(json.contains("\"totalWaterSavedLiters\""));
        assert!(json.contains("\"HIGH\""));
    }

    #[test]
    fn empty_alerts_message() {
        let text = render_alerts(&[], OutputFormat::Text).unwrap();
        assert!(text.contains("No heat alerts"));
        let json = render_alerts(&[], OutputFormat::Json).unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn tables_render_defaults() {
        let text = render_tables(&AgronomyTables::default(), OutputFormat::Text).unwrap();
        assert!(text.contains("tomato"));
        assert!(text.contains("sandy"));
        assert!(text.contains("drip"));
    }
}
