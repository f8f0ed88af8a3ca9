use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ScoreBreakdown {
    pub base: u32,
    pub bonus: u32,
    pub total: u32,
}

// `ids` must already be deduplicated.
pub(super) fn compute_score(
    ids: &[PatternId],
    modifiers: Modifiers,
    base: &KnowledgeBase,
) -> ScoreBreakdown {
    let base_score = ids
        .iter()
        .filter_map(|id| base.pattern(id))
        .fold(0_u32, |sum, pattern| sum.saturating_add(pattern.weight));
    let bonus = modifiers.exposure_bonus();

    ScoreBreakdown {
        base: base_score,
        bonus,
        total: base_score.saturating_add(bonus),
    }
}
