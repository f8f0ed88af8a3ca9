use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tracing::{info, warn};

use super::output::{stdout_writer, write_display_text, write_json};
use crate::cli::{Frequency, InteractiveArgs, ProductForm, UseSetting};
use crate::display::{DisplayState, FormState, Session};
use crate::knowledge;

const HELP: &str = "commands: :form <spray|liquid|powder|solid>, :setting <indoor|outdoor>, \
:frequency <daily|weekly|occasional>, :ventilated <on|off>, :show, :reset, :quit; \
any other line is submitted as the ingredient list";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Submit(String),
    Form(ProductForm),
    Setting(UseSetting),
    Frequency(Frequency),
    Ventilated(bool),
    Show,
    Reset,
    Help,
    Quit,
}

pub fn run(args: InteractiveArgs) -> Result<()> {
    let loaded = knowledge::load(args.knowledge.knowledge_base.as_deref())?;
    let mut session = Session::new(&loaded.base);
    info!("interactive session started");

    let stdin = io::stdin();
    let mut output = stdout_writer();
    drive(stdin.lock(), &mut output, &mut session, args.json)?;

    info!("interactive session ended");
    Ok(())
}

fn drive<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    session: &mut Session<'_>,
    json: bool,
) -> Result<()> {
    write_state(output, session.display(), json)?;

    for line in input.lines() {
        let line = line.context("failed to read interactive input")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, "rejected interactive command");
                writeln!(output, "error: {err}")?;
                output.flush()?;
                continue;
            }
        };

        match command {
            SessionCommand::Submit(ingredients) => {
                session.form_mut().ingredients = ingredients;
                let state = session.submit().clone();
                write_state(output, &state, json)?;
            }
            SessionCommand::Form(value) => {
                session.form_mut().product_form = value;
                write_form(output, session.form())?;
            }
            SessionCommand::Setting(value) => {
                session.form_mut().use_setting = value;
                write_form(output, session.form())?;
            }
            SessionCommand::Frequency(value) => {
                session.form_mut().frequency = value;
                write_form(output, session.form())?;
            }
            SessionCommand::Ventilated(value) => {
                session.form_mut().ventilated = value;
                write_form(output, session.form())?;
            }
            SessionCommand::Show => {
                write_form(output, session.form())?;
                write_state(output, session.display(), json)?;
            }
            SessionCommand::Reset => {
                let state = session.reset().clone();
                write_state(output, &state, json)?;
            }
            SessionCommand::Help => {
                writeln!(output, "{HELP}")?;
                output.flush()?;
            }
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> Result<SessionCommand> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(SessionCommand::Submit(trimmed.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let value = parts.next().unwrap_or("");
    if parts.next().is_some() {
        bail!("too many arguments for :{name}");
    }

    let command = match name.as_str() {
        "form" => SessionCommand::Form(parse_choice(&name, value)?),
        "setting" => SessionCommand::Setting(parse_choice(&name, value)?),
        "frequency" => SessionCommand::Frequency(parse_choice(&name, value)?),
        "ventilated" => match value.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" => SessionCommand::Ventilated(true),
            "off" | "no" | "false" => SessionCommand::Ventilated(false),
            other => bail!("expected on or off for :ventilated, got '{other}'"),
        },
        "show" => SessionCommand::Show,
        "reset" => SessionCommand::Reset,
        "help" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command ':{other}'"),
    };
    Ok(command)
}

fn parse_choice<T: ValueEnum>(name: &str, value: &str) -> Result<T> {
    T::from_str(value, true).map_err(|err| anyhow::anyhow!("invalid value for :{name}: {err}"))
}

fn write_form<W: Write>(output: &mut W, form: &FormState) -> Result<()> {
    writeln!(
        output,
        "form: product_form={} use_setting={} frequency={} ventilated={}",
        form.product_form.as_str(),
        form.use_setting.as_str(),
        form.frequency.as_str(),
        form.ventilated
    )?;
    output.flush()?;
    Ok(())
}

fn write_state<W: Write>(output: &mut W, state: &DisplayState, json: bool) -> Result<()> {
    if json {
        write_json(output, state)
    } else {
        write_display_text(output, state)
    }
}
