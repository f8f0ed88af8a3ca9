use super::*;

const MAX_REASONS: usize = 3;

pub const PLACEHOLDER_CONFIDENCE_NOTE: &str =
    "Provide ingredients to calculate an inhalation signal.";
pub const AWAITING_INPUT: &str = "Awaiting input.";
pub const NO_INGREDIENTS_GAP: &str = "No ingredients provided; inhalation coverage unknown.";

const NO_PATTERN_KNOWN: &str = "No identified inhalation risk pattern found. This does not confirm safety. It reflects current knowledge coverage.";
const INSUFFICIENT_WITHOUT_UNKNOWNS: &str =
    "Several ingredients lack inhalation-specific studies; interpret signals cautiously.";
const GENERIC_GAPS: &str = "Gaps remain in long-term inhalation studies and mixture interactions.";

const SPRAY_REASON: &str = "Spray/aerosol use amplifies inhalable droplets";
const INDOOR_REASON: &str = "Indoor use increases residence time of vapors";
const FREQUENCY_REASON: &str = "Frequent use can keep airborne levels elevated";
const VENTILATION_REASON: &str = "Claimed ventilation reduces accumulation (partial offset)";

pub(super) fn derive_confidence(tiers: &[ConfidenceTier]) -> ConfidenceTier {
    tiers
        .iter()
        .copied()
        .max()
        .unwrap_or(ConfidenceTier::Insufficient)
}

pub(super) fn collect_reasons(
    ids: &[PatternId],
    hits: &[&IngredientRecord],
    modifiers: Modifiers,
    base: &KnowledgeBase,
) -> Vec<String> {
    let mut reasons = ids
        .iter()
        .filter_map(|id| base.pattern(id))
        .map(|pattern| {
            let related = triggered_by(&pattern.id, hits);
            if related.is_empty() {
                pattern.name.clone()
            } else {
                format!("{} ({})", pattern.name, related.join(", "))
            }
        })
        .collect::<Vec<String>>();

    let modifier_reasons = [
        (modifiers.spray, SPRAY_REASON),
        (modifiers.indoor, INDOOR_REASON),
        (modifiers.daily, FREQUENCY_REASON),
        (modifiers.ventilated, VENTILATION_REASON),
    ];
    reasons.extend(
        modifier_reasons
            .iter()
            .filter(|(active, _)| *active)
            .map(|(_, reason)| reason.to_string()),
    );

    reasons.truncate(MAX_REASONS);
    reasons
}

pub(super) fn describe_what_we_know(
    hits: &[&IngredientRecord],
    ids: &[PatternId],
    base: &KnowledgeBase,
) -> Vec<String> {
    if ids.is_empty() {
        return vec![NO_PATTERN_KNOWN.to_string()];
    }

    hits.iter()
        .map(|hit| {
            let names = hit
                .patterns
                .iter()
                .filter_map(|id| base.pattern(id))
                .map(|pattern| pattern.name.as_str())
                .collect::<Vec<&str>>()
                .join("; ");
            format!("{}: {} — {}", hit.display, names, hit.notes)
        })
        .collect()
}

pub(super) fn describe_what_we_dont_know(
    unknowns: &[String],
    insufficient_flag: bool,
    base: &KnowledgeBase,
) -> Vec<String> {
    if !unknowns.is_empty() {
        return vec![format!(
            "No inhalation-focused data located for: {}. Pattern tagged as \"{}.\"",
            unknowns.join(", "),
            base.insufficient_data_name()
        )];
    }
    // Only reachable when a known record itself lists the insufficient-data pattern.
    if insufficient_flag {
        return vec![INSUFFICIENT_WITHOUT_UNKNOWNS.to_string()];
    }
    vec![GENERIC_GAPS.to_string()]
}
