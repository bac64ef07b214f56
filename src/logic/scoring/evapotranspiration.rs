use super::{ScoreFactor, ScoringInput};

/// ET0 compared against the crop's stress threshold
pub struct EvapotranspirationFactor;

impl ScoreFactor for EvapotranspirationFactor {
    fn id(&self) -> &'static str {
        "evapotranspiration"
    }

    fn name(&self) -> &'static str {
        "Evapotranspiration"
    }

    fn evaluate(&self, input: &ScoringInput) -> (i32, String) {
        let et0 = input.et0_mm;
        let threshold = input.et_threshold_mm;
        if et0 > threshold * 1.5 {
            (
                2,
                format!(
                    "Evapotranspiration ({:.1} mm/day) is far above the crop threshold of {:.1} mm.",
                    et0, threshold
                ),
            )
        } else if et0 > threshold {
            (
                1,
                format!(
                    "Evapotranspiration ({:.1} mm/day) exceeds the crop threshold of {:.1} mm.",
                    et0, threshold
                ),
            )
        } else {
            (
                0,
                format!(
                    "Evapotranspiration ({:.1} mm/day) is within the crop threshold of {:.1} mm.",
                    et0, threshold
                ),
            )
        }
    }
}
