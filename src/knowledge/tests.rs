use std::path::PathBuf;

use super::*;
use crate::model::{ConfidenceTier, Source};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("irs-knowledge-{}-{name}", std::process::id()))
}

#[test]
fn builtin_tables_pass_validation() {
    let file = KnowledgeBase::builtin().to_file();
    assert_eq!(file.patterns.len(), 9);
    assert_eq!(file.ingredients.len(), 5);
    KnowledgeBase::from_file(file).expect("built-in knowledge base should validate");
}

#[test]
fn lookup_is_case_insensitive_and_exact() {
    let base = KnowledgeBase::builtin();

    let lower = base.lookup("limonene").expect("limonene is known");
    let upper = base.lookup("LIMONENE").expect("LIMONENE is known");
    assert_eq!(lower, upper);
    assert_eq!(lower.display, "Limonene");

    assert!(base.lookup("limon").is_none());
    assert!(base.lookup("d-limonene").is_none());
}

#[test]
fn insufficient_data_name_comes_from_the_table() {
    let base = KnowledgeBase::builtin();
    assert_eq!(base.insufficient_data_name(), "Insufficient Inhalation Data");
    assert_eq!(base.designated().insufficient_data, PatternId::new("p9"));
}

#[test]
fn validation_reports_every_broken_reference() {
    let mut file = KnowledgeBase::builtin().to_file();
    file.ingredients.push(IngredientRecord {
        key: "Mystery Oil".to_string(),
        display: "Mystery oil".to_string(),
        patterns: vec![PatternId::new("p42")],
        notes: String::new(),
        confidence: ConfidenceTier::Low,
        sources: vec![Source {
            title: "Local file".to_string(),
            url: Some("file:///tmp/sds.pdf".to_string()),
        }],
    });
    file.designated.aerosol = PatternId::new("p77");

    let err = KnowledgeBase::from_file(file).expect_err("validation should fail");
    let message = err.to_string();
    assert!(message.contains("must be non-empty, trimmed and lowercase"));
    assert!(message.contains("unknown pattern p42"));
    assert!(message.contains("non-http url"));
    assert!(message.contains("designated aerosol pattern p77"));
}

#[test]
fn validation_rejects_weighted_insufficient_pattern_and_empty_lists() {
    let mut file = KnowledgeBase::builtin().to_file();
    for pattern in &mut file.patterns {
        if pattern.id.as_str() == "p9" {
            pattern.weight = 2;
        }
    }
    file.ingredients[0].patterns.clear();
    file.ingredients[1].key = file.ingredients[2].key.clone();

    let message = KnowledgeBase::from_file(file)
        .expect_err("validation should fail")
        .to_string();
    assert!(message.contains("must have weight 0"));
    assert!(message.contains("lists no patterns"));
    assert!(message.contains("duplicate ingredient key: isopropyl alcohol"));
}

#[test]
fn load_without_path_uses_builtin() {
    let loaded = load(None).expect("built-in load should succeed");
    assert_eq!(loaded.origin, KnowledgeOrigin::Builtin);
    assert!(loaded.path.is_none());
    assert_eq!(loaded.sha256.len(), 64);
}

#[test]
fn load_reads_exported_file_and_fingerprints_it() {
    let path = temp_path("roundtrip.json");
    let raw = r#"{
        "patterns": [
            {"id": "a", "name": "Aerosol", "weight": 1, "rationale": "droplets"},
            {"id": "d", "name": "Daily", "weight": 1, "rationale": "repeat"},
            {"id": "v", "name": "Volatile", "weight": 4, "rationale": "vapor"},
            {"id": "u", "name": "Unknown data", "weight": 0, "rationale": "gap"}
        ],
        "ingredients": [
            {"key": "ethanol", "display": "Ethanol", "patterns": ["v"], "notes": "solvent",
             "sources": [{"title": "Handbook"}]}
        ],
        "designated": {"insufficient_data": "u", "aerosol": "a", "repeated_exposure": "d"}
    }"#;
    fs::write(&path, raw).expect("fixture should be written");

    let loaded = load(Some(&path)).expect("fixture should load");
    fs::remove_file(&path).ok();

    assert_eq!(loaded.origin, KnowledgeOrigin::File);
    assert_eq!(loaded.sha256, sha256_bytes(raw.as_bytes()));
    let ethanol = loaded.base.lookup("Ethanol").expect("ethanol is known");
    assert_eq!(ethanol.confidence, ConfidenceTier::Moderate);
    assert_eq!(ethanol.sources[0].url, None);
    assert_eq!(loaded.base.insufficient_data_name(), "Unknown data");
}

#[test]
fn load_reports_missing_file_with_path() {
    let path = temp_path("missing.json");
    let err = load(Some(&path)).expect_err("missing file should fail");
    assert!(err.to_string().contains("failed to read"));
}
