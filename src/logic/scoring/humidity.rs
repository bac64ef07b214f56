use super::{ScoreFactor, ScoringInput};

/// Relative humidity factor. Dry air pulls water from leaves and soil.
pub struct HumidityFactor;

impl ScoreFactor for HumidityFactor {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Humidity"
    }

    fn evaluate(&self, input: &ScoringInput) -> (i32, String) {
        let rh = input.humidity_pct;
        if rh < 20.0 {
            (3, format!("Very dry air ({:.0}% RH) accelerates water loss.", rh))
        } else if rh < 30.0 {
            (2, format!("Dry air ({:.0}% RH) increases water loss.", rh))
        } else if rh < 50.0 {
            (1, format!("Moderately dry air ({:.0}% RH) adds some water loss.", rh))
        } else if rh > 80.0 {
            (-1, format!("Humid air ({:.0}% RH) reduces water loss.", rh))
        } else {
            (0, format!("Humidity ({:.0}% RH) has little effect.", rh))
        }
    }
}
