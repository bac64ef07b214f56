use crate::models::{Et0Source, ReferenceEt0};
use chrono::NaiveDate;

/// Lowest ET0 the estimator reports (mm/day)
pub const MIN_ET0_MM: f64 = 0.1;

/// Local reference evapotranspiration estimate (mm/day).
///
/// A Hargreaves-style temperature term scaled by dryness, wind (m/s) and UV.
/// Freezing temperatures contribute no radiation term and anything below
/// [`MIN_ET0_MM`] (including NaN from bad inputs) is raised to the floor.
pub fn estimate_et0(temp_c: f64, humidity_pct: f64, wind_speed_ms: f64, uv_index: f64) -> f64 {
    let et0 = 0.0023
        * (temp_c + 17.8)
        * temp_c.max(0.0).sqrt()
        * (1.0 - humidity_pct / 100.0)
        * (1.0 + wind_speed_ms / 10.0)
        * (1.0 + uv_index / 20.0);

    if et0.is_nan() {
        MIN_ET0_MM
    } else {
        et0.max(MIN_ET0_MM)
    }
}

/// Pick the ET0 for a day: a provider value for that date wins over the
/// local estimate.
pub fn resolve_et0(
    date: NaiveDate,
    reference: Option<&ReferenceEt0>,
    temp_c: f64,
    humidity_pct: f64,
    wind_speed_ms: f64,
    uv_index: f64,
) -> (f64, Et0Source) {
    match reference {
        Some(r) if r.date == date && r.value_mm_per_day.is_finite() => {
            (r.value_mm_per_day.max(0.0), Et0Source::Reference)
        }
        _ => (
            estimate_et0(temp_c, humidity_pct, wind_speed_ms, uv_index),
            Et0Source::Estimated,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_dry_day() {
        // 0.0023 * 47.8 * sqrt(30) * 0.7 * 1.2 * 1.4
        let expected = 0.0023 * 47.8 * 30f64.sqrt() * 0.7 * 1.2 * 1.4;
        let et0 = estimate_et0(30.0, 30.0, 2.0, 8.0);
        assert!((et0 - expected).abs() < 1e-9);
        assert!(et0 > 0.5);
    }

    #[test]
    fn freezing_clamps_to_floor() {
        assert_eq!(estimate_et0(-5.0, 50.0, 1.0, 1.0), MIN_ET0_MM);
        assert_eq!(estimate_et0(0.0, 50.0, 1.0, 1.0), MIN_ET0_MM);
    }

    #[test]
    fn saturated_air_clamps_to_floor() {
        assert_eq!(estimate_et0(25.0, 100.0, 3.0, 5.0), MIN_ET0_MM);
        assert_eq!(estimate_et0(25.0, 120.0, 3.0, 5.0), MIN_ET0_MM);
    }

    #[test]
    fn nan_inputs_clamp_to_floor() {
        assert_eq!(estimate_et0(f64::NAN, 50.0, 1.0, 1.0), MIN_ET0_MM);
    }

    #[test]
    fn wind_and_uv_increase_et0() {
        let calm = estimate_et0(28.0, 40.0, 0.0, 0.0);
        let windy = estimate_et0(28.0, 40.0, 5.0, 0.0);
        let sunny = estimate_et0(28.0, 40.0, 0.0, 10.0);
        assert!(windy > calm);
        assert!(sunny > calm);
    }

    #[test]
    fn reference_takes_precedence_on_matching_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let reference = ReferenceEt0 {
            latitude: 0.0,
            longitude: 0.0,
            date,
            value_mm_per_day: 6.2,
        };

        let (et0, source) = resolve_et0(date, Some(&reference), 30.0, 40.0, 2.0, 5.0);
        assert_eq!(et0, 6.2);
        assert_eq!(source, Et0Source::Reference);

        let other_day = date.succ_opt().unwrap();
        let (_, source) = resolve_et0(other_day, Some(&reference), 30.0, 40.0, 2.0, 5.0);
        assert_eq!(source, Et0Source::Estimated);

        let (_, source) = resolve_et0(date, None, 30.0, 40.0, 2.0, 5.0);
        assert_eq!(source, Et0Source::Estimated);
    }
}
