use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub String);

impl PatternId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: PatternId,
    pub name: String,
    pub weight: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub key: String,
    pub display: String,
    pub patterns: Vec<PatternId>,
    pub notes: String,
    #[serde(default = "default_record_confidence")]
    pub confidence: ConfidenceTier,
    #[serde(default)]
    pub sources: Vec<Source>,
}

fn default_record_confidence() -> ConfidenceTier {
    ConfidenceTier::Moderate
}

// Declared strongest to weakest; `max` picks the worst tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
    Insufficient,
}

impl ConfidenceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Insufficient => "Insufficient",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Self::High => "Based on peer-reviewed inhalation or strong mechanistic studies.",
            Self::Moderate => "Mechanistic or limited inhalation data available.",
            Self::Low => {
                "Reliance on regulatory classifications or indirect evidence; uncertainty is elevated."
            }
            Self::Insufficient => {
                "No long-term inhalation studies found; interpret signals with caution."
            }
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
}

impl SeverityTier {
    pub const MODERATE_MIN: u32 = 3;
    pub const HIGH_MIN: u32 = 6;

    pub fn from_total(total: u32) -> Self {
        if total >= Self::HIGH_MIN {
            Self::High
        } else if total >= Self::MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn chip(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "🟢 Low inhalation concern",
            Self::Moderate => "🟡 Moderate inhalation concern",
            Self::High => "🔴 High inhalation concern",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chip())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub spray: bool,
    pub indoor: bool,
    pub daily: bool,
    pub ventilated: bool,
}

impl Modifiers {
    pub fn exposure_bonus(self) -> u32 {
        let raised = u32::from(self.spray) + u32::from(self.indoor) + u32::from(self.daily);
        raised.saturating_sub(u32::from(self.ventilated))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub ingredients: Vec<String>,
    pub pattern_ids: Vec<PatternId>,
    pub hits: Vec<IngredientRecord>,
    pub unknowns: Vec<String>,
    pub insufficient_flag: bool,
    pub modifiers: Modifiers,
    pub base_score: u32,
    pub exposure_bonus: u32,
    pub total_score: u32,
    pub severity: SeverityTier,
    pub confidence: ConfidenceTier,
    pub confidence_note: String,
    pub reasons: Vec<String>,
    pub what_we_know: Vec<String>,
    pub what_we_dont_know: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_boundaries_are_inclusive() {
        assert_eq!(SeverityTier::from_total(0), SeverityTier::Low);
        assert_eq!(SeverityTier::from_total(2), SeverityTier::Low);
        assert_eq!(SeverityTier::from_total(3), SeverityTier::Moderate);
        assert_eq!(SeverityTier::from_total(5), SeverityTier::Moderate);
        assert_eq!(SeverityTier::from_total(6), SeverityTier::High);
        assert_eq!(SeverityTier::from_total(u32::MAX), SeverityTier::High);
    }

    #[test]
    fn confidence_ladder_orders_insufficient_worst() {
        let tiers = [
            ConfidenceTier::High,
            ConfidenceTier::Insufficient,
            ConfidenceTier::Low,
            ConfidenceTier::Moderate,
        ];
        assert_eq!(tiers.iter().copied().max(), Some(ConfidenceTier::Insufficient));
        assert!(ConfidenceTier::Low > ConfidenceTier::Moderate);
        assert!(ConfidenceTier::Moderate > ConfidenceTier::High);
    }

    #[test]
    fn exposure_bonus_never_goes_negative() {
        let ventilated_only = Modifiers {
            ventilated: true,
            ..Modifiers::default()
        };
        assert_eq!(ventilated_only.exposure_bonus(), 0);

        let all_raised = Modifiers {
            spray: true,
            indoor: true,
            daily: true,
            ventilated: false,
        };
        assert_eq!(all_raised.exposure_bonus(), 3);

        let offset = Modifiers {
            ventilated: true,
            ..all_raised
        };
        assert_eq!(offset.exposure_bonus(), 2);
    }

    #[test]
    fn record_confidence_defaults_to_moderate() {
        let record: IngredientRecord = serde_json::from_str(
            r#"{"key":"x","display":"X","patterns":["p1"],"notes":"n"}"#,
        )
        .expect("record should parse");
        assert_eq!(record.confidence, ConfidenceTier::Moderate);
        assert!(record.sources.is_empty());
    }
}
