use super::{ScoreFactor, ScoringInput};

/// Temperature factor
///
/// Points:
/// - +3: above 40°C
/// - +2: above 35°C
/// - +1: above 28°C
/// - -1: below 15°C
pub struct TemperatureFactor;

impl ScoreFactor for TemperatureFactor {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature"
    }

    fn evaluate(&self, input: &ScoringInput) -> (i32, String) {
        let t = input.temp_c;
        if t > 40.0 {
            (
                3,
                format!("Extreme heat ({:.1}°C) sharply raises crop water demand.", t),
            )
        } else if t > 35.0 {
            (
                2,
                format!("High temperature ({:.1}°C) raises crop water demand.", t),
            )
        } else if t > 28.0 {
            (
                1,
                format!("Warm temperature ({:.1}°C) slightly raises water demand.", t),
            )
        } else if t < 15.0 {
            (
                -1,
                format!("Cool temperature ({:.1}°C) lowers water demand.", t),
            )
        } else {
            (
                0,
                format!("Temperature ({:.1}°C) is in the comfortable range.", t),
            )
        }
    }
}
