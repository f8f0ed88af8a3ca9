use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::display::DisplayState;
use crate::knowledge::KnowledgeBase;

pub fn stdout_writer() -> io::BufWriter<io::StdoutLock<'static>> {
    io::BufWriter::new(io::stdout().lock())
}

pub fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, value).context("failed to serialize json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub fn write_display_text<W: Write>(output: &mut W, state: &DisplayState) -> Result<()> {
    writeln!(output, "Signal: {} [{}]", state.signal_label, state.chip)?;
    writeln!(output, "Why it matters: {}", state.score_breakdown)?;

    writeln!(output, "Key reasons:")?;
    for (rank, reason) in state.reason_lines().iter().enumerate() {
        writeln!(output, "\t{}. {reason}", rank + 1)?;
    }

    writeln!(output, "Confidence: {}", state.confidence)?;
    if !state.confidence_note.is_empty() {
        writeln!(output, "\t{}", state.confidence_note)?;
    }

    writeln!(output, "What we know:")?;
    for line in &state.what_we_know {
        writeln!(output, "\t- {line}")?;
    }
    writeln!(output, "What we don't know:")?;
    for line in &state.what_we_dont_know {
        writeln!(output, "\t- {line}")?;
    }

    writeln!(output, "Patterns: {}", state.patterns.len())?;
    for card in &state.patterns {
        writeln!(output, "\t{}\tweight {}", card.name, card.weight)?;
        writeln!(output, "\t  {}", card.rationale)?;
    }

    writeln!(output, "Sources:")?;
    if let Some(placeholder) = state.sources_placeholder() {
        writeln!(output, "\t- {placeholder}")?;
    }
    for source in &state.sources {
        match &source.url {
            Some(url) => writeln!(output, "\t- {} <{url}>", source.title)?,
            None => writeln!(output, "\t- {}", source.title)?,
        }
    }

    output.flush()?;
    Ok(())
}

pub fn write_library_text<W: Write>(output: &mut W, base: &KnowledgeBase) -> Result<()> {
    let designated = base.designated();
    writeln!(output, "Patterns: {}", base.patterns().len())?;
    for pattern in base.patterns() {
        let role = if pattern.id == designated.insufficient_data {
            "\tinsufficient-data"
        } else if pattern.id == designated.aerosol {
            "\tspray"
        } else if pattern.id == designated.repeated_exposure {
            "\tdaily"
        } else {
            ""
        };
        writeln!(
            output,
            "\t{}\tweight {}\t{}{role}",
            pattern.id, pattern.weight, pattern.name
        )?;
    }

    writeln!(output, "Ingredients: {}", base.ingredients().len())?;
    for record in base.ingredients() {
        let ids = record
            .patterns
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<&str>>()
            .join(",");
        writeln!(
            output,
            "\t{}\t{}\tconfidence={}\tpatterns={ids}",
            record.key, record.display, record.confidence
        )?;
        for source in &record.sources {
            match &source.url {
                Some(url) => writeln!(output, "\t  source: {} <{url}>", source.title)?,
                None => writeln!(output, "\t  source: {}", source.title)?,
            }
        }
    }

    output.flush()?;
    Ok(())
}
