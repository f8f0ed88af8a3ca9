use anyhow::Result;
use tracing::info;

use super::output::{stdout_writer, write_display_text, write_json};
use crate::cli::ResetArgs;
use crate::display::DisplayState;

pub fn run(args: ResetArgs) -> Result<()> {
    info!("reset requested");
    let state = DisplayState::reset();

    let mut output = stdout_writer();
    if args.json {
        write_json(&mut output, &state)
    } else {
        write_display_text(&mut output, &state)
    }
}
