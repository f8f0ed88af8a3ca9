use super::*;

#[derive(Debug, Default)]
pub(super) struct MatchOutcome<'a> {
    pub hits: Vec<&'a IngredientRecord>,
    pub unknowns: Vec<String>,
    pub pattern_bucket: Vec<PatternId>,
    pub confidences: Vec<ConfidenceTier>,
}

pub(super) fn match_ingredients<'a>(names: &[String], base: &'a KnowledgeBase) -> MatchOutcome<'a> {
    let mut outcome = MatchOutcome::default();

    for name in names {
        match base.lookup(name) {
            Some(record) => {
                debug!(ingredient = %name, key = %record.key, "matched ingredient");
                outcome.pattern_bucket.extend(record.patterns.iter().cloned());
                outcome.confidences.push(record.confidence);
                outcome.hits.push(record);
            }
            None => {
                debug!(ingredient = %name, "ingredient not in knowledge base");
                outcome.unknowns.push(name.clone());
                outcome
                    .pattern_bucket
                    .push(base.designated().insufficient_data.clone());
                outcome.confidences.push(ConfidenceTier::Insufficient);
            }
        }
    }

    outcome
}
