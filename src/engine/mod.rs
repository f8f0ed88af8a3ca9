use tracing::{debug, info, warn};

use crate::knowledge::KnowledgeBase;
use crate::model::{
    ConfidenceTier, EvaluationResult, IngredientRecord, Modifiers, PatternId, SeverityTier,
};

mod explain;
mod matcher;
mod parse;
mod score;

use explain::*;
use matcher::*;
use parse::parse_ingredients;
use score::*;

pub fn evaluate(
    raw_ingredients: &str,
    modifiers: Modifiers,
    base: &KnowledgeBase,
) -> EvaluationResult {
    let ingredients = parse_ingredients(raw_ingredients);
    let mut matched = match_ingredients(&ingredients, base);

    let mut bucket = std::mem::take(&mut matched.pattern_bucket);
    if modifiers.spray {
        bucket.push(base.designated().aerosol.clone());
    }
    if modifiers.daily {
        bucket.push(base.designated().repeated_exposure.clone());
    }

    let unique_ids = unique_in_order(bucket);
    let insufficient = &base.designated().insufficient_data;
    let insufficient_flag = unique_ids.contains(insufficient);
    let pattern_ids = unique_ids
        .into_iter()
        .filter(|id| id != insufficient)
        .collect::<Vec<PatternId>>();

    let breakdown = compute_score(&pattern_ids, modifiers, base);
    let severity = SeverityTier::from_total(breakdown.total);
    let confidence = derive_confidence(&matched.confidences);
    let reasons = collect_reasons(&pattern_ids, &matched.hits, modifiers, base);

    let confidence_note = if ingredients.is_empty() {
        PLACEHOLDER_CONFIDENCE_NOTE.to_string()
    } else {
        confidence.note().to_string()
    };
    let awaiting_input = ingredients.is_empty() && pattern_ids.is_empty();
    let (what_we_know, what_we_dont_know) = if awaiting_input {
        (
            vec![AWAITING_INPUT.to_string()],
            vec![NO_INGREDIENTS_GAP.to_string()],
        )
    } else {
        (
            describe_what_we_know(&matched.hits, &pattern_ids, base),
            describe_what_we_dont_know(&matched.unknowns, insufficient_flag, base),
        )
    };

    if !matched.unknowns.is_empty() {
        warn!(
            unknowns = %matched.unknowns.join(", "),
            "ingredients without inhalation data"
        );
    }
    info!(
        ingredients = ingredients.len(),
        matched = matched.hits.len(),
        patterns = pattern_ids.len(),
        base = breakdown.base,
        bonus = breakdown.bonus,
        total = breakdown.total,
        severity = %severity,
        confidence = %confidence,
        "evaluation complete"
    );

    EvaluationResult {
        ingredients,
        hits: matched.hits.into_iter().cloned().collect(),
        unknowns: matched.unknowns,
        pattern_ids,
        insufficient_flag,
        modifiers,
        base_score: breakdown.base,
        exposure_bonus: breakdown.bonus,
        total_score: breakdown.total,
        severity,
        confidence,
        confidence_note,
        reasons,
        what_we_know,
        what_we_dont_know,
    }
}

pub fn empty_result() -> EvaluationResult {
    EvaluationResult {
        ingredients: Vec::new(),
        pattern_ids: Vec::new(),
        hits: Vec::new(),
        unknowns: Vec::new(),
        insufficient_flag: false,
        modifiers: Modifiers::default(),
        base_score: 0,
        exposure_bonus: 0,
        total_score: 0,
        severity: SeverityTier::Low,
        confidence: ConfidenceTier::Insufficient,
        confidence_note: PLACEHOLDER_CONFIDENCE_NOTE.to_string(),
        reasons: Vec::new(),
        what_we_know: vec![AWAITING_INPUT.to_string()],
        what_we_dont_know: vec![NO_INGREDIENTS_GAP.to_string()],
    }
}

fn unique_in_order(ids: Vec<PatternId>) -> Vec<PatternId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    debug!(count = unique.len(), "deduplicated pattern ids");
    unique
}

fn triggered_by<'a>(id: &PatternId, hits: &[&'a IngredientRecord]) -> Vec<&'a str> {
    hits.iter()
        .copied()
        .filter(|hit| hit.patterns.contains(id))
        .map(|hit| hit.display.as_str())
        .collect()
}
