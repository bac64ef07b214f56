use super::{
    evapotranspiration::EvapotranspirationFactor, humidity::HumidityFactor,
    rainfall::RainfallFactor, temperature::TemperatureFactor, ScoreFactor, ScoringInput,
};
use crate::models::{CropProfile, FactorContribution, RecommendationResult, UrgencyTier};

pub struct RecommendationScorer {
    factors: Vec<Box<dyn ScoreFactor>>,
}

impl RecommendationScorer {
    /// Factors run, and explanation clauses appear, in this order
    pub fn new() -> Self {
        let factors: Vec<Box<dyn ScoreFactor>> = vec![
            Box::new(TemperatureFactor),
            Box::new(HumidityFactor),
            Box::new(RainfallFactor),
            Box::new(EvapotranspirationFactor),
        ];

        Self { factors }
    }

    pub fn contributions(&self, input: &ScoringInput) -> Vec<FactorContribution> {
        self.factors
            .iter()
            .map(|factor| {
                let (points, clause) = factor.evaluate(input);
                FactorContribution {
                    factor: factor.id().to_string(),
                    points,
                    clause,
                }
            })
            .collect()
    }

    /// Total score; unbounded in both directions
    pub fn score(&self, input: &ScoringInput) -> i32 {
        self.contributions(input).iter().map(|c| c.points).sum()
    }

    pub fn tier(&self, input: &ScoringInput) -> UrgencyTier {
        UrgencyTier::from_score(self.score(input))
    }

    /// Score the signals and estimate the water kept in the ground compared
    /// with meeting the crop's full demand.
    pub fn recommend(
        &self,
        input: &ScoringInput,
        crop: &CropProfile,
        hectares: f64,
    ) -> RecommendationResult {
        let contributions = self.contributions(input);
        let score: i32 = contributions.iter().map(|c| c.points).sum();
        let tier = UrgencyTier::from_score(score);
        let explanation = contributions
            .iter()
            .map(|c| c.clause.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(crop = %crop.name, score, %tier, "Scored irrigation urgency");

        RecommendationResult {
            tier,
            score,
            explanation,
            water_saved_liters: water_saved(crop, hectares, tier),
            contributions,
        }
    }

    pub fn list_factors(&self) -> Vec<(&'static str, &'static str)> {
        self.factors.iter().map(|f| (f.id(), f.name())).collect()
    }
}

impl Default for RecommendationScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Liters not applied relative to the crop's full daily demand
pub fn water_saved(crop: &CropProfile, hectares: f64, tier: UrgencyTier) -> f64 {
    let base_demand = crop.water_per_hectare_day * hectares;
    (base_demand * (1.0 - tier.usage_multiplier())).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(temp_c: f64, humidity_pct: f64, rainfall_mm: f64, et0_mm: f64) -> ScoringInput {
        ScoringInput {
            temp_c,
            humidity_pct,
            rainfall_mm,
            et0_mm,
            et_threshold_mm: 5.0,
        }
    }

    #[test]
    fn factors_run_in_fixed_order() {
        let scorer = RecommendationScorer::new();
        let ids: Vec<&str> = scorer.list_factors().iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec!["temperature", "humidity", "rainfall", "evapotranspiration"]
        );
    }

    #[test]
    fn explanation_has_every_clause_in_order() {
        let scorer = RecommendationScorer::new();
        let crop = CropProfile::fallback("test");
        // Neutral temperature and humidity still contribute a clause
        let result = scorer.recommend(&input(22.0, 60.0, 15.0, 2.0), &crop, 1.0);

        let temp = result.explanation.find("Temperature").unwrap();
        let humidity = result.explanation.find("Humidity").unwrap();
        let rain = result.explanation.find("rain").unwrap();
        let et = result.explanation.find("Evapotranspiration").unwrap();
        assert!(temp < humidity && humidity < rain && rain < et);
        assert_eq!(result.contributions.len(), 4);
        assert_eq!(result.score, -1);
    }

    #[test]
    fn moderate_band() {
        let scorer = RecommendationScorer::new();
        // +1 temp, +1 humidity, +1 rain, 0 et
        let i = input(30.0, 45.0, 5.0, 4.0);
        assert_eq!(scorer.score(&i), 3);
        assert_eq!(scorer.tier(&i), UrgencyTier::Moderate);
    }

    #[test]
    fn score_can_go_negative() {
        let scorer = RecommendationScorer::new();
        let i = input(10.0, 90.0, 30.0, 0.5);
        assert_eq!(scorer.score(&i), -3);
        assert_eq!(scorer.tier(&i), UrgencyTier::Low);
    }

    #[test]
    fn water_saved_by_tier() {
        let crop = CropProfile::new("wheat", 4.0, 4000.0, 4.0);
        assert_eq!(water_saved(&crop, 1.0, UrgencyTier::High), 0.0);
        assert!((water_saved(&crop, 1.0, UrgencyTier::Moderate) - 1600.0).abs() < 1e-9);
        assert!((water_saved(&crop, 2.0, UrgencyTier::Low) - 5600.0).abs() < 1e-9);
        assert_eq!(water_saved(&crop, 0.0, UrgencyTier::Low), 0.0);
    }
}
