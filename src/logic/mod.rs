pub mod demand;
pub mod evapotranspiration;
pub mod heat_risk;
pub mod plan_generator;
pub mod scheduling;
pub mod scoring;

pub use plan_generator::PlanGenerator;
pub use scoring::RecommendationScorer;
