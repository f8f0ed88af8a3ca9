use super::*;
use crate::model::{ConfidenceTier, Source};

fn pattern(id: &str, name: &str, weight: u32, rationale: &str) -> Pattern {
    Pattern {
        id: PatternId::new(id),
        name: name.to_string(),
        weight,
        rationale: rationale.to_string(),
    }
}

fn ingredient(
    key: &str,
    display: &str,
    patterns: &[&str],
    notes: &str,
    confidence: ConfidenceTier,
    source: (&str, &str),
) -> IngredientRecord {
    IngredientRecord {
        key: key.to_string(),
        display: display.to_string(),
        patterns: patterns.iter().copied().map(PatternId::new).collect(),
        notes: notes.to_string(),
        confidence,
        sources: vec![Source {
            title: source.0.to_string(),
            url: Some(source.1.to_string()),
        }],
    }
}

pub(super) fn knowledge_file() -> KnowledgeFile {
    KnowledgeFile {
        patterns: patterns(),
        ingredients: ingredients(),
        designated: DesignatedPatterns {
            insufficient_data: PatternId::new("p9"),
            aerosol: PatternId::new("p7"),
            repeated_exposure: PatternId::new("p8"),
        },
    }
}

fn patterns() -> Vec<Pattern> {
    vec![
        pattern(
            "p1",
            "Membrane-Disrupting Cationic Agents",
            3,
            "Cationic actives can interact with lipid membranes in the airways, suggesting elevated inhalation signal even at low doses.",
        ),
        pattern(
            "p2",
            "Persistent Polymeric Compounds",
            3,
            "Polymeric or high-molecular-weight materials can persist on surfaces and become airborne as fine droplets or dust.",
        ),
        pattern(
            "p3",
            "Volatile Organic Compounds (VOCs)",
            2,
            "Volatile solvents and fragrances can form an inhalable vapor cloud and irritate the upper airway.",
        ),
        pattern(
            "p4",
            "Secondary Pollutant Formation",
            3,
            "Terpenes and similar compounds can react with indoor ozone to generate secondary pollutants such as ultrafine particles.",
        ),
        pattern(
            "p5",
            "Strong Irritant / Inflammatory Response",
            2,
            "Irritants can inflame respiratory tissue, heightening sensitivity to repeated exposures.",
        ),
        pattern(
            "p6",
            "Surfactant-Induced Barrier Disruption",
            2,
            "Surfactants can disrupt mucosal barriers, increasing uptake of other co-formulated substances.",
        ),
        pattern(
            "p7",
            "Aerosolized Exposure Amplification",
            1,
            "Sprays and aerosols produce fine droplets that travel deeper into the respiratory tract.",
        ),
        pattern(
            "p8",
            "Chronic Low-Dose Repeated Exposure",
            1,
            "Frequent use can keep airborne concentrations elevated, even if single doses are low.",
        ),
        pattern(
            "p9",
            "Insufficient Inhalation Data",
            0,
            "Published inhalation-focused data not located. Uncertainty remains high.",
        ),
    ]
}

fn ingredients() -> Vec<IngredientRecord> {
    vec![
        ingredient(
            "benzalkonium chloride",
            "Benzalkonium chloride",
            &["p1", "p6"],
            "Quaternary ammonium surfactant; membrane-active with mucosal interactions.",
            ConfidenceTier::Moderate,
            (
                "EPA Reregistration Eligibility Decision for Alkyl Dimethyl Benzyl Ammonium Chloride (2006)",
                "https://www.epa.gov/sites/default/files/2015-09/documents/benzalkonium-chloride-red.pdf",
            ),
        ),
        ingredient(
            "limonene",
            "Limonene",
            &["p3", "p4"],
            "Volatile terpene fragrance; reacts with indoor ozone to form secondary aerosols.",
            ConfidenceTier::Moderate,
            (
                "Weschler & Shields, Indoor ozone/terpene reactions (Environ Sci Technol, 1999)",
                "https://doi.org/10.1021/es980947y",
            ),
        ),
        ingredient(
            "isopropyl alcohol",
            "Isopropyl alcohol",
            &["p3", "p5"],
            "Volatile solvent; transient upper-airway irritant at higher vapor levels.",
            ConfidenceTier::Moderate,
            (
                "NIOSH Pocket Guide to Chemical Hazards: Isopropyl alcohol",
                "https://www.cdc.gov/niosh/npg/npgd0359.html",
            ),
        ),
        ingredient(
            "polyquaternium-10",
            "Polyquaternium-10",
            &["p2"],
            "Cationic polymer; can persist on surfaces and be re-aerosolized.",
            ConfidenceTier::Low,
            (
                "Manufacturer safety data sheet for Polyquaternium-10 (film-forming polymer)",
                "https://www.tcichemicals.com/US/en/p/P1232",
            ),
        ),
        ingredient(
            "polysorbate 20",
            "Polysorbate 20",
            &["p6"],
            "Nonionic surfactant that can loosen epithelial barriers, especially in aerosols.",
            ConfidenceTier::Low,
            (
                "ECHA substance information: Polysorbate 20",
                "https://echa.europa.eu/substance-information/-/substanceinfo/100.066.969",
            ),
        ),
    ]
}
