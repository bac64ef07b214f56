use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Irrigation urgency derived from the recommendation score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyTier {
    Low,
    Moderate,
    High,
}

impl UrgencyTier {
    pub const HIGH_MIN_SCORE: i32 = 6;
    pub const MODERATE_MIN_SCORE: i32 = 3;

    /// Every integer score maps to exactly one tier
    pub fn from_score(score: i32) -> Self {
        if score >= Self::HIGH_MIN_SCORE {
            UrgencyTier::High
        } else if score >= Self::MODERATE_MIN_SCORE {
            UrgencyTier::Moderate
        } else {
            UrgencyTier::Low
        }
    }

    /// Share of the full crop demand applied at this urgency
    pub fn usage_multiplier(&self) -> f64 {
        match self {
            UrgencyTier::Low => 0.3,
            UrgencyTier::Moderate => 0.6,
            UrgencyTier::High => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Low => "LOW",
            UrgencyTier::Moderate => "MODERATE",
            UrgencyTier::High => "HIGH",
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeatRiskTier {
    Low,
    Moderate,
    High,
    Extreme,
}

impl HeatRiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatRiskTier::Low => "LOW",
            HeatRiskTier::Moderate => "MODERATE",
            HeatRiskTier::High => "HIGH",
            HeatRiskTier::Extreme => "EXTREME",
        }
    }

    /// Field guidance for the tier
    pub fn recommendation(&self) -> &'static str {
        match self {
            HeatRiskTier::Extreme => {
                "Increase irrigation by 30%. Install shade cloth over sensitive crops. \
                 Monitor plants every 2 hours during the afternoon."
            }
            HeatRiskTier::High => {
                "Increase irrigation by 20%. Provide shading for seedlings and leafy crops. \
                 Monitor plants every 4 hours."
            }
            HeatRiskTier::Moderate => {
                "Increase irrigation by 10%. Mulch to retain soil moisture. \
                 Check plants twice a day."
            }
            HeatRiskTier::Low => {
                "No irrigation increase needed. No shading required. Check plants once a day."
            }
        }
    }
}

impl std::fmt::Display for HeatRiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scoring factor's share of a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub factor: String,
    pub points: i32,
    pub clause: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub tier: UrgencyTier,
    pub score: i32,
    pub explanation: String,
    pub water_saved_liters: f64,
    pub contributions: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatAlert {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub temperature_c: f64,
    pub heat_index_c: f64,
    pub risk: HeatRiskTier,
    pub recommendation: String,
}
