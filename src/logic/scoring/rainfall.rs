use super::{ScoreFactor, ScoringInput};

/// Rainfall factor over today plus tomorrow's forecast
pub struct RainfallFactor;

impl ScoreFactor for RainfallFactor {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn name(&self) -> &'static str {
        "Rainfall"
    }

    fn evaluate(&self, input: &ScoringInput) -> (i32, String) {
        let mm = input.rainfall_mm;
        if mm < 1.0 {
            (
                3,
                format!(
                    "Almost no rain ({:.1} mm today and tomorrow); the field depends on irrigation.",
                    mm
                ),
            )
        } else if mm < 3.0 {
            (
                2,
                format!(
                    "Light rain ({:.1} mm today and tomorrow) will not meet crop needs.",
                    mm
                ),
            )
        } else if mm < 10.0 {
            (
                1,
                format!(
                    "Moderate rain ({:.1} mm today and tomorrow) covers part of the demand.",
                    mm
                ),
            )
        } else {
            (
                -1,
                format!(
                    "Significant rain ({:.1} mm today and tomorrow) reduces the need to irrigate.",
                    mm
                ),
            )
        }
    }
}
