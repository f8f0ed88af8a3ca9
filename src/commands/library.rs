use anyhow::Result;
use tracing::info;

use super::output::{stdout_writer, write_json, write_library_text};
use crate::cli::LibraryArgs;
use crate::knowledge;
use crate::util::write_json_pretty;

pub fn run(args: LibraryArgs) -> Result<()> {
    let loaded = knowledge::load(args.knowledge.knowledge_base.as_deref())?;
    let file = loaded.base.to_file();

    if let Some(export_path) = &args.export_path {
        write_json_pretty(export_path, &file)?;
        info!(path = %export_path.display(), "exported knowledge base");
    }

    let mut output = stdout_writer();
    if args.json {
        write_json(&mut output, &file)
    } else {
        write_library_text(&mut output, &loaded.base)
    }
}
