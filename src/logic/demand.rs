use serde::{Deserialize, Serialize};

/// Bounds on the weather correction multipliers
pub const MIN_CORRECTION: f64 = 0.6;
pub const MAX_CORRECTION: f64 = 1.6;

/// Demand rises 4% per °C above 25°C
pub fn temperature_factor(temp_c: f64) -> f64 {
    (1.0 + (temp_c - 25.0) * 0.04).clamp(MIN_CORRECTION, MAX_CORRECTION)
}

/// Demand rises 2% per point of relative humidity below 50%
pub fn humidity_factor(humidity_pct: f64) -> f64 {
    (1.0 + (50.0 - humidity_pct) * 0.02).clamp(MIN_CORRECTION, MAX_CORRECTION)
}

/// Net crop water requirement in liters for the field
pub fn net_water_liters(
    water_per_m2_day: f64,
    area_m2: f64,
    temp_c: f64,
    humidity_pct: f64,
) -> f64 {
    water_per_m2_day * area_m2 * temperature_factor(temp_c) * humidity_factor(humidity_pct)
}

/// 1 mm of rain over 1 m² is 1 liter
pub fn rainfall_liters(rainfall_mm: f64, area_m2: f64) -> f64 {
    rainfall_mm.max(0.0) * area_m2
}

/// Breakdown of the net to gross conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossRequirement {
    pub adjusted_net_liters: f64,
    pub rainfall_liters: f64,
    pub irrigation_needed_liters: f64,
    pub gross_liters: f64,
}

impl GrossRequirement {
    /// True when rain alone covers the soil-adjusted demand
    pub fn covered_by_rain(&self) -> bool {
        self.adjusted_net_liters > 0.0 && self.irrigation_needed_liters == 0.0
    }
}

/// Convert a net requirement into the volume that must be pumped.
///
/// Soil retention scales the net need, rain is credited next, and the
/// delivery efficiency of the irrigation method is applied last to what is
/// left. The result is never negative.
pub fn gross_requirement(
    net_liters: f64,
    soil_factor: f64,
    efficiency: f64,
    rainfall_mm: f64,
    area_m2: f64,
) -> GrossRequirement {
    let adjusted_net_liters = net_liters * soil_factor;
    let rainfall_liters = rainfall_liters(rainfall_mm, area_m2);
    let irrigation_needed_liters = (adjusted_net_liters - rainfall_liters).max(0.0);
    let gross_liters = if efficiency > 0.0 {
        (irrigation_needed_liters / efficiency).max(0.0)
    } else {
        0.0
    };

    GrossRequirement {
        adjusted_net_liters,
        rainfall_liters,
        irrigation_needed_liters,
        gross_liters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_conditions_have_unit_factors() {
        assert!((temperature_factor(25.0) - 1.0).abs() < 1e-12);
        assert!((humidity_factor(50.0) - 1.0).abs() < 1e-12);
        assert!((net_water_liters(6.5, 100.0, 25.0, 50.0) - 650.0).abs() < 1e-9);
    }

    #[test]
    fn factors_are_clamped() {
        assert_eq!(temperature_factor(60.0), MAX_CORRECTION);
        assert_eq!(temperature_factor(-20.0), MIN_CORRECTION);
        assert_eq!(humidity_factor(0.0), MAX_CORRECTION);
        assert_eq!(humidity_factor(100.0), MIN_CORRECTION);
    }

    #[test]
    fn hot_dry_day_increases_demand() {
        // 30°C → 1.2, 40% RH → 1.2
        let net = net_water_liters(4.0, 1000.0, 30.0, 40.0);
        assert!((net - 4.0 * 1000.0 * 1.2 * 1.2).abs() < 1e-6);
    }

    #[test]
    fn drip_on_sandy_soil() {
        let req = gross_requirement(100.0, 1.15, 0.90, 0.0, 10.0);
        assert!((req.adjusted_net_liters - 115.0).abs() < 1e-9);
        assert!((req.gross_liters - 127.777_777).abs() < 1e-3);
        assert!(!req.covered_by_rain());
    }

    #[test]
    fn rain_is_credited_before_efficiency() {
        // 200 L net on loam, 0.1 mm over 500 m² = 50 L of rain
        let req = gross_requirement(200.0, 1.0, 0.5, 0.1, 500.0);
        assert!((req.rainfall_liters - 50.0).abs() < 1e-9);
        assert!((req.irrigation_needed_liters - 150.0).abs() < 1e-9);
        assert!((req.gross_liters - 300.0).abs() < 1e-9);
    }

    #[test]
    fn heavy_rain_clamps_to_zero() {
        let req = gross_requirement(500.0, 0.85, 0.75, 20.0, 100.0);
        assert_eq!(req.irrigation_needed_liters, 0.0);
        assert_eq!(req.gross_liters, 0.0);
        assert!(req.covered_by_rain());
    }

    #[test]
    fn negative_rain_is_ignored() {
        let req = gross_requirement(100.0, 1.0, 1.0, -5.0, 10.0);
        assert_eq!(req.rainfall_liters, 0.0);
        assert!((req.gross_liters - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_area_needs_nothing() {
        let net = net_water_liters(8.0, 0.0, 45.0, 5.0);
        let req = gross_requirement(net, 1.15, 0.5, 0.0, 0.0);
        assert_eq!(req.gross_liters, 0.0);
    }
}
