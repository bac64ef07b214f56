use super::scheduling::irrigation_time;
use crate::models::{DailyWeather, HeatAlert, HeatRiskTier};

/// At or below this temperature (°C, 80°F) the heat index is the temperature
pub const HEAT_INDEX_THRESHOLD_C: f64 = 26.7;

fn to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Heat index in °C, rounded to one decimal.
///
/// Uses the NWS Rothfusz regression, which is fitted in °F.
pub fn heat_index(temp_c: f64, humidity_pct: f64) -> f64 {
    if temp_c <= HEAT_INDEX_THRESHOLD_C {
        return temp_c;
    }

    let t = to_fahrenheit(temp_c);
    let rh = humidity_pct;
    let hi_f = -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    (to_celsius(hi_f) * 10.0).round() / 10.0
}

/// Risk tier from air temperature alone
pub fn classify(temp_c: f64) -> HeatRiskTier {
    if temp_c > 40.0 {
        HeatRiskTier::Extreme
    } else if temp_c > 35.0 {
        HeatRiskTier::High
    } else if temp_c > 30.0 {
        HeatRiskTier::Moderate
    } else {
        HeatRiskTier::Low
    }
}

/// Alert for a day, or `None` when the risk is low
pub fn alert_for(day: &DailyWeather) -> Option<HeatAlert> {
    let risk = classify(day.temp_c);
    if risk == HeatRiskTier::Low {
        return None;
    }

    Some(HeatAlert {
        date: day.date,
        time: irrigation_time(day.temp_c),
        temperature_c: day.temp_c,
        heat_index_c: heat_index(day.temp_c, day.humidity_pct),
        risk,
        recommendation: risk.recommendation().to_string(),
    })
}

/// One alert per day above the low tier, in the order of `days`
pub fn heat_alerts(days: &[DailyWeather]) -> Vec<HeatAlert> {
    days.iter().filter_map(alert_for).collect()
}
