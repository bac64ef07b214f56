pub mod engine;
pub mod evapotranspiration;
pub mod humidity;
pub mod rainfall;
pub mod temperature;

pub use engine::RecommendationScorer;

/// Weather signals scored for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    pub temp_c: f64,
    pub humidity_pct: f64,
    /// Today's rain plus tomorrow's forecast
    pub rainfall_mm: f64,
    pub et0_mm: f64,
    pub et_threshold_mm: f64,
}

/// Trait for a weighted scoring signal
pub trait ScoreFactor: Send + Sync {
    /// Unique identifier for this factor
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Points contributed and the explanation sentence for them
    fn evaluate(&self, input: &ScoringInput) -> (i32, String);
}
