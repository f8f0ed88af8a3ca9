use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{IngredientRecord, Pattern, PatternId};
use crate::util::sha256_bytes;

mod builtin;
#[cfg(test)]
mod tests;
mod validate;

use validate::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignatedPatterns {
    pub insufficient_data: PatternId,
    pub aerosol: PatternId,
    pub repeated_exposure: PatternId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub patterns: Vec<Pattern>,
    pub ingredients: Vec<IngredientRecord>,
    pub designated: DesignatedPatterns,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    patterns: Vec<Pattern>,
    ingredients: Vec<IngredientRecord>,
    index: HashMap<String, usize>,
    designated: DesignatedPatterns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeOrigin {
    Builtin,
    File,
}

#[derive(Debug, Clone)]
pub struct LoadedKnowledge {
    pub base: KnowledgeBase,
    pub origin: KnowledgeOrigin,
    pub path: Option<PathBuf>,
    pub sha256: String,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self::from_parts(builtin::knowledge_file())
    }

    pub fn from_file(file: KnowledgeFile) -> Result<Self> {
        let url_pattern =
            Regex::new(SOURCE_URL_PATTERN).context("failed to compile source url regex")?;
        let violations = collect_violations(&file, &url_pattern);
        if !violations.is_empty() {
            bail!(
                "knowledge base failed validation: {}",
                violations.join("; ")
            );
        }
        Ok(Self::from_parts(file))
    }

    fn from_parts(file: KnowledgeFile) -> Self {
        let index = file
            .ingredients
            .iter()
            .enumerate()
            .map(|(position, record)| (record.key.clone(), position))
            .collect();

        Self {
            patterns: file.patterns,
            ingredients: file.ingredients,
            index,
            designated: file.designated,
        }
    }

    pub fn to_file(&self) -> KnowledgeFile {
        KnowledgeFile {
            patterns: self.patterns.clone(),
            ingredients: self.ingredients.clone(),
            designated: self.designated.clone(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn ingredients(&self) -> &[IngredientRecord] {
        &self.ingredients
    }

    pub fn designated(&self) -> &DesignatedPatterns {
        &self.designated
    }

    pub fn pattern(&self, id: &PatternId) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| &pattern.id == id)
    }

    pub fn lookup(&self, name: &str) -> Option<&IngredientRecord> {
        let key = name.to_lowercase();
        self.index
            .get(&key)
            .and_then(|position| self.ingredients.get(*position))
    }

    pub fn insufficient_data_name(&self) -> &str {
        self.pattern(&self.designated.insufficient_data)
            .map(|pattern| pattern.name.as_str())
            .unwrap_or("Insufficient Inhalation Data")
    }
}

pub fn load(path: Option<&Path>) -> Result<LoadedKnowledge> {
    let Some(path) = path else {
        let base = KnowledgeBase::builtin();
        let raw = serde_json::to_vec(&base.to_file())
            .context("failed to serialize built-in knowledge base")?;
        let sha256 = sha256_bytes(&raw);
        info!(
            patterns = base.patterns().len(),
            ingredients = base.ingredients().len(),
            sha256 = %sha256,
            "using built-in knowledge base"
        );
        return Ok(LoadedKnowledge {
            base,
            origin: KnowledgeOrigin::Builtin,
            path: None,
            sha256,
        });
    };

    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file: KnowledgeFile = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let base = KnowledgeBase::from_file(file)
        .with_context(|| format!("invalid knowledge base: {}", path.display()))?;
    let sha256 = sha256_bytes(&raw);

    info!(
        path = %path.display(),
        patterns = base.patterns().len(),
        ingredients = base.ingredients().len(),
        sha256 = %sha256,
        "loaded knowledge base"
    );

    Ok(LoadedKnowledge {
        base,
        origin: KnowledgeOrigin::File,
        path: Some(path.to_path_buf()),
        sha256,
    })
}
