use serde::Serialize;

use crate::engine;
use crate::knowledge::KnowledgeBase;
use crate::model::{ConfidenceTier, EvaluationResult, SeverityTier};

mod session;

pub use session::{FormState, Session};

const NO_REASONS: &str = "No identified inhalation risk pattern found.";
const NO_SOURCES: &str = "No verifiable sources available for the provided ingredients.";
const NO_SIGNALS_SUFFIX: &str =
    "No mechanism-based inhalation signals matched. Coverage gaps remain.";
const SIGNALS_SUFFIX: &str = "Signals emphasize mechanism-driven exposure rather than ingredient lists, highlighting how droplets, vapors, and frequency shape inhalation dose.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCard {
    pub name: String,
    pub weight: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationEntry {
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub signal_label: String,
    pub chip: String,
    pub severity: SeverityTier,
    pub total_score: u32,
    pub reasons: Vec<String>,
    pub confidence: ConfidenceTier,
    pub confidence_note: String,
    pub what_we_know: Vec<String>,
    pub what_we_dont_know: Vec<String>,
    pub patterns: Vec<PatternCard>,
    pub sources: Vec<CitationEntry>,
    pub score_breakdown: String,
}

impl DisplayState {
    pub fn render(result: &EvaluationResult, base: &KnowledgeBase) -> Self {
        let cards = result
            .pattern_ids
            .iter()
            .filter_map(|id| base.pattern(id))
            .map(|pattern| PatternCard {
                name: pattern.name.clone(),
                weight: pattern.weight,
                rationale: pattern.rationale.clone(),
            })
            .collect();
        Self::assemble(result, cards)
    }

    pub fn reset() -> Self {
        Self::assemble(&engine::empty_result(), Vec::new())
    }

    fn assemble(result: &EvaluationResult, patterns: Vec<PatternCard>) -> Self {
        let breakdown = format!(
            "Base patterns: {}, Exposure modifiers: {}.",
            result.base_score, result.exposure_bonus
        );
        let suffix = if result.pattern_ids.is_empty() {
            NO_SIGNALS_SUFFIX
        } else {
            SIGNALS_SUFFIX
        };

        Self {
            signal_label: format!(
                "{} (score {})",
                result.severity.label(),
                result.total_score
            ),
            chip: result.severity.chip().to_string(),
            severity: result.severity,
            total_score: result.total_score,
            reasons: result.reasons.clone(),
            confidence: result.confidence,
            confidence_note: result.confidence_note.clone(),
            what_we_know: result.what_we_know.clone(),
            what_we_dont_know: result.what_we_dont_know.clone(),
            patterns,
            sources: citations(result),
            score_breakdown: format!("{breakdown} {suffix}"),
        }
    }

    pub fn reason_lines(&self) -> Vec<&str> {
        if self.reasons.is_empty() {
            vec![NO_REASONS]
        } else {
            self.reasons.iter().map(String::as_str).collect()
        }
    }

    pub fn sources_placeholder(&self) -> Option<&'static str> {
        self.sources.is_empty().then_some(NO_SOURCES)
    }
}

// Records keep duplicate hits; the rendered list shows each citation once.
fn citations(result: &EvaluationResult) -> Vec<CitationEntry> {
    let mut entries: Vec<CitationEntry> = Vec::new();
    for source in result.hits.iter().flat_map(|hit| hit.sources.iter()) {
        let entry = CitationEntry {
            title: source.title.clone(),
            url: source.url.clone(),
        };
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modifiers;

    #[test]
    fn reset_state_is_low_zero_insufficient() {
        let state = DisplayState::reset();
        assert_eq!(state.severity, SeverityTier::Low);
        assert_eq!(state.total_score, 0);
        assert_eq!(state.signal_label, "🟢 Low inhalation concern (score 0)");
        assert_eq!(state.chip, "Low");
        assert_eq!(state.confidence, ConfidenceTier::Insufficient);
        assert_eq!(
            state.confidence_note,
            "Provide ingredients to calculate an inhalation signal."
        );
        assert_eq!(state.what_we_know, vec!["Awaiting input."]);
        assert_eq!(
            state.what_we_dont_know,
            vec!["No ingredients provided; inhalation coverage unknown."]
        );
        assert!(state.patterns.is_empty());
        assert!(state.sources.is_empty());
        assert_eq!(state.reason_lines(), vec![NO_REASONS]);
        assert_eq!(state.sources_placeholder(), Some(NO_SOURCES));
        assert_eq!(
            state.score_breakdown,
            "Base patterns: 0, Exposure modifiers: 0. No mechanism-based inhalation signals matched. Coverage gaps remain."
        );
    }

    #[test]
    fn empty_submission_renders_like_reset() {
        let base = KnowledgeBase::builtin();
        let result = engine::evaluate("", Modifiers::default(), &base);
        assert_eq!(DisplayState::render(&result, &base), DisplayState::reset());
    }

    #[test]
    fn render_builds_cards_for_displayed_patterns_only() {
        let base = KnowledgeBase::builtin();
        let result = engine::evaluate("limonene, mystery", Modifiers::default(), &base);
        let state = DisplayState::render(&result, &base);

        let names = state
            .patterns
            .iter()
            .map(|card| card.name.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(
            names,
            vec!["Volatile Organic Compounds (VOCs)", "Secondary Pollutant Formation"]
        );
        assert_eq!(state.patterns[1].weight, 3);
        assert!(
            state
                .score_breakdown
                .starts_with("Base patterns: 5, Exposure modifiers: 0. Signals")
        );
    }

    #[test]
    fn citations_are_deduplicated_when_rendered() {
        let base = KnowledgeBase::builtin();
        let result = engine::evaluate(
            "limonene, Limonene, polysorbate 20",
            Modifiers::default(),
            &base,
        );
        assert_eq!(result.hits.len(), 3);

        let state = DisplayState::render(&result, &base);
        assert_eq!(state.sources.len(), 2);
        assert_eq!(
            state.sources[0].url.as_deref(),
            Some("https://doi.org/10.1021/es980947y")
        );
        assert_eq!(state.sources_placeholder(), None);
    }
}
