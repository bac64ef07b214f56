use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Current conditions plus an optional per-day forecast, as delivered by a
/// weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub temp_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_rainfall_tomorrow_mm: Option<f64>,
    #[serde(default)]
    pub wind_speed_ms: f64,
    #[serde(default)]
    pub uv_index: f64,
    #[serde(default)]
    pub daily_forecast: Vec<ForecastDay>,
}

/// A forecast entry. Any field may be missing; missing fields are filled
/// from the current-day values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub rainfall_mm: Option<f64>,
    #[serde(default)]
    pub forecast_rainfall_tomorrow_mm: Option<f64>,
    #[serde(default)]
    pub wind_speed_ms: Option<f64>,
    #[serde(default)]
    pub uv_index: Option<f64>,
}

impl ForecastDay {
    fn is_complete(&self) -> bool {
        [
            self.temp_c,
            self.humidity_pct,
            self.rainfall_mm,
            self.wind_speed_ms,
            self.uv_index,
        ]
        .into_iter()
        .all(|v| finite(v).is_some())
    }
}

/// Non-finite forecast values count as missing
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    /// Observed current-day values
    Current,
    /// Complete forecast entry
    Forecast,
    /// Forecast entry with gaps filled from current values
    Partial,
    /// No forecast entry; current values repeated
    Repeated,
}

impl WeatherSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherSource::Current => "current",
            WeatherSource::Forecast => "forecast",
            WeatherSource::Partial => "partial",
            WeatherSource::Repeated => "repeated",
        }
    }
}

impl std::fmt::Display for WeatherSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully resolved weather for one day of the planning horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub temp_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub wind_speed_ms: f64,
    pub uv_index: f64,
    pub rainfall_tomorrow_mm: Option<f64>,
    pub source: WeatherSource,
}

impl DailyWeather {
    /// Today's rain plus tomorrow's forecast, treating unknown as dry
    pub fn rainfall_window_mm(&self) -> f64 {
        self.rainfall_mm + self.rainfall_tomorrow_mm.unwrap_or(0.0)
    }
}

impl WeatherSnapshot {
    pub fn forecast_for(&self, date: NaiveDate) -> Option<&ForecastDay> {
        self.daily_forecast.iter().find(|d| d.date == date)
    }

    /// Current-day values as a resolved day
    pub fn current(&self) -> DailyWeather {
        let tomorrow = self.date.checked_add_days(Days::new(1));
        DailyWeather {
            date: self.date,
            temp_c: self.temp_c,
            humidity_pct: self.humidity_pct,
            rainfall_mm: self.rainfall_mm.max(0.0),
            wind_speed_ms: self.wind_speed_ms,
            uv_index: self.uv_index,
            rainfall_tomorrow_mm: finite(self.forecast_rainfall_tomorrow_mm)
                .or_else(|| self.forecast_rainfall_on(tomorrow)),
            source: WeatherSource::Current,
        }
    }

    /// Resolve the weather `offset` days after the snapshot date.
    ///
    /// Forecast entries are matched by date. Missing entries or fields fall
    /// back to the current-day values so a day can always be resolved.
    pub fn resolve_day(&self, offset: u32) -> DailyWeather {
        if offset == 0 {
            return self.current();
        }

        let Some(date) = self.date.checked_add_days(Days::new(offset as u64)) else {
            return DailyWeather {
                source: WeatherSource::Repeated,
                ..self.current()
            };
        };
        let tomorrow = date.checked_add_days(Days::new(1));

        match self.forecast_for(date) {
            Some(day) => DailyWeather {
                date,
                temp_c: finite(day.temp_c).unwrap_or(self.temp_c),
                humidity_pct: finite(day.humidity_pct).unwrap_or(self.humidity_pct),
                rainfall_mm: finite(day.rainfall_mm).unwrap_or(self.rainfall_mm).max(0.0),
                wind_speed_ms: finite(day.wind_speed_ms).unwrap_or(self.wind_speed_ms),
                uv_index: finite(day.uv_index).unwrap_or(self.uv_index),
                rainfall_tomorrow_mm: finite(day.forecast_rainfall_tomorrow_mm)
                    .or_else(|| self.forecast_rainfall_on(tomorrow)),
                source: if day.is_complete() {
                    WeatherSource::Forecast
                } else {
                    WeatherSource::Partial
                },
            },
            None => {
                tracing::warn!(%date, "No forecast for day, repeating current conditions");
                DailyWeather {
                    date,
                    rainfall_tomorrow_mm: self.forecast_rainfall_on(tomorrow),
                    source: WeatherSource::Repeated,
                    ..self.current()
                }
            }
        }
    }

    /// Resolve every day of a horizon, ordered by date
    pub fn resolve_days(&self, horizon_days: u32) -> Vec<DailyWeather> {
        (0..horizon_days).map(|i| self.resolve_day(i)).collect()
    }

    fn forecast_rainfall_on(&self, date: Option<NaiveDate>) -> Option<f64> {
        date.and_then(|d| self.forecast_for(d))
            .and_then(|d| finite(d.rainfall_mm))
            .map(|mm| mm.max(0.0))
    }
}

/// Reference evapotranspiration from an agro-meteorological provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEt0 {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub value_mm_per_day: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            date: date(1),
            temp_c: 30.0,
            humidity_pct: 40.0,
            rainfall_mm: 2.0,
            forecast_rainfall_tomorrow_mm: None,
            wind_speed_ms: 3.0,
            uv_index: 8.0,
            daily_forecast: vec![
                ForecastDay {
                    date: date(2),
                    temp_c: Some(33.0),
                    humidity_pct: Some(35.0),
                    rainfall_mm: Some(0.0),
                    forecast_rainfall_tomorrow_mm: None,
                    wind_speed_ms: Some(2.0),
                    uv_index: Some(9.0),
                },
                ForecastDay {
                    date: date(3),
                    temp_c: Some(36.0),
                    rainfall_mm: Some(5.0),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn day_zero_is_current() {
        let day = snapshot().resolve_day(0);
        assert_eq!(day.date, date(1));
        assert_eq!(day.source, WeatherSource::Current);
        assert_eq!(day.temp_c, 30.0);
        // Tomorrow's rain comes from the forecast entry for the 2nd
        assert_eq!(day.rainfall_tomorrow_mm, Some(0.0));
    }

    #[test]
    fn complete_forecast_entry_is_used() {
        let day = snapshot().resolve_day(1);
        assert_eq!(day.source, WeatherSource::Forecast);
        assert_eq!(day.temp_c, 33.0);
        assert_eq!(day.uv_index, 9.0);
        assert_eq!(day.rainfall_tomorrow_mm, Some(5.0));
    }

    #[test]
    fn partial_forecast_fills_from_current() {
        let day = snapshot().resolve_day(2);
        assert_eq!(day.source, WeatherSource::Partial);
        assert_eq!(day.temp_c, 36.0);
        assert_eq!(day.humidity_pct, 40.0);
        assert_eq!(day.wind_speed_ms, 3.0);
        assert_eq!(day.rainfall_mm, 5.0);
    }

    #[test]
    fn non_finite_forecast_values_fall_back() {
        let mut snap = snapshot();
        snap.daily_forecast[0].temp_c = Some(f64::NAN);
        snap.daily_forecast[0].rainfall_mm = Some(f64::INFINITY);

        let day = snap.resolve_day(1);
        assert_eq!(day.source, WeatherSource::Partial);
        assert_eq!(day.temp_c, 30.0);
        assert_eq!(day.rainfall_mm, 2.0);
        assert_eq!(snap.resolve_day(0).rainfall_tomorrow_mm, None);
    }

    #[test]
    fn missing_forecast_repeats_current() {
        let day = snapshot().resolve_day(5);
        assert_eq!(day.date, date(6));
        assert_eq!(day.source, WeatherSource::Repeated);
        assert_eq!(day.temp_c, 30.0);
        assert_eq!(day.rainfall_mm, 2.0);
        assert_eq!(day.rainfall_tomorrow_mm, None);
    }

    #[test]
    fn explicit_tomorrow_rain_wins() {
        let mut snap = snapshot();
        snap.forecast_rainfall_tomorrow_mm = Some(4.0);
        let day = snap.resolve_day(0);
        assert_eq!(day.rainfall_tomorrow_mm, Some(4.0));
        assert_eq!(day.rainfall_window_mm(), 6.0);
    }

    #[test]
    fn resolve_days_is_ordered() {
        let days = snapshot().resolve_days(7);
        assert_eq!(days.len(), 7);
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn snapshot_parses_camel_case_json() {
        let json = r#"{
            "date": "2024-07-01",
            "tempC": 31.5,
            "humidityPct": 45,
            "rainfallMm": 0.5,
            "forecastRainfallTomorrowMm": 1.5,
            "windSpeedMs": 2.5,
            "uvIndex": 7,
            "dailyForecast": [{ "date": "2024-07-02", "tempC": 32.0 }]
        }"#;
        let snap: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.temp_c, 31.5);
        assert_eq!(snap.forecast_rainfall_tomorrow_mm, Some(1.5));
        assert_eq!(snap.daily_forecast.len(), 1);
        assert_eq!(snap.daily_forecast[0].humidity_pct, None);
    }
}
