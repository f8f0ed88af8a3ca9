use std::collections::HashSet;

use super::*;

pub(super) const SOURCE_URL_PATTERN: &str = r"^https?://\S+$";

pub(super) fn collect_violations(file: &KnowledgeFile, url_pattern: &Regex) -> Vec<String> {
    let mut violations = Vec::new();

    let mut pattern_ids = HashSet::new();
    for pattern in &file.patterns {
        if pattern.id.as_str().trim().is_empty() {
            violations.push(format!("pattern '{}' has an empty id", pattern.name));
        }
        if !pattern_ids.insert(&pattern.id) {
            violations.push(format!("duplicate pattern id: {}", pattern.id));
        }
    }

    let designated = [
        ("insufficient_data", &file.designated.insufficient_data),
        ("aerosol", &file.designated.aerosol),
        ("repeated_exposure", &file.designated.repeated_exposure),
    ];
    for (role, id) in designated {
        if !pattern_ids.contains(id) {
            violations.push(format!("designated {role} pattern {id} is not defined"));
        }
    }

    let insufficient_weight = file
        .patterns
        .iter()
        .find(|pattern| pattern.id == file.designated.insufficient_data)
        .map(|pattern| pattern.weight)
        .unwrap_or(0);
    if insufficient_weight != 0 {
        violations.push(format!(
            "insufficient_data pattern {} must have weight 0, got {insufficient_weight}",
            file.designated.insufficient_data
        ));
    }

    let mut keys = HashSet::new();
    for record in &file.ingredients {
        let normalized = record.key.trim().to_lowercase();
        if record.key.is_empty() || normalized != record.key {
            violations.push(format!(
                "ingredient key '{}' must be non-empty, trimmed and lowercase",
                record.key
            ));
        }
        if !keys.insert(record.key.as_str()) {
            violations.push(format!("duplicate ingredient key: {}", record.key));
        }
        if record.patterns.is_empty() {
            violations.push(format!("ingredient '{}' lists no patterns", record.key));
        }
        for id in &record.patterns {
            if !pattern_ids.contains(id) {
                violations.push(format!(
                    "ingredient '{}' references unknown pattern {id}",
                    record.key
                ));
            }
        }
        for source in &record.sources {
            let Some(url) = &source.url else {
                continue;
            };
            if !url_pattern.is_match(url) {
                violations.push(format!(
                    "ingredient '{}' source '{}' has a non-http url: {url}",
                    record.key, source.title
                ));
            }
        }
    }

    violations
}
