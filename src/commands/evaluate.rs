use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::output::{stdout_writer, write_display_text, write_json};
use crate::cli::EvaluateArgs;
use crate::display::{DisplayState, FormState, Session};
use crate::knowledge::{self, KnowledgeOrigin, LoadedKnowledge};
use crate::util::{now_utc_string, write_json_pretty};

const REPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeProvenance {
    pub origin: KnowledgeOrigin,
    pub path: Option<String>,
    pub sha256: String,
}

impl KnowledgeProvenance {
    pub fn from_loaded(loaded: &LoadedKnowledge) -> Self {
        Self {
            origin: loaded.origin,
            path: loaded.path.as_ref().map(|path| path.display().to_string()),
            sha256: loaded.sha256.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub report_version: u32,
    pub generated_at: String,
    pub knowledge_base: KnowledgeProvenance,
    pub form: FormState,
    pub display: DisplayState,
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let loaded = knowledge::load(args.knowledge.knowledge_base.as_deref())?;

    let form = FormState {
        ingredients: args.ingredients,
        product_form: args.product_form,
        use_setting: args.use_setting,
        frequency: args.frequency,
        ventilated: args.ventilated,
    };
    info!(
        product_form = form.product_form.as_str(),
        use_setting = form.use_setting.as_str(),
        frequency = form.frequency.as_str(),
        ventilated = form.ventilated,
        "evaluation requested"
    );

    let mut session = Session::new(&loaded.base);
    *session.form_mut() = form;
    let display = session.submit().clone();

    if let Some(report_path) = args.report_path {
        write_report(&report_path, &loaded, session.form(), &display)?;
    }

    let mut output = stdout_writer();
    if args.json {
        write_json(&mut output, &display)
    } else {
        write_display_text(&mut output, &display)
    }
}

fn write_report(
    path: &Path,
    loaded: &LoadedKnowledge,
    form: &FormState,
    display: &DisplayState,
) -> Result<()> {
    let report = EvaluationReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        knowledge_base: KnowledgeProvenance::from_loaded(loaded),
        form: form.clone(),
        display: display.clone(),
    };
    write_json_pretty(path, &report)?;
    info!(path = %path.display(), "wrote evaluation report");
    Ok(())
}
