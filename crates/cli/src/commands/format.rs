use anyhow::{Context, Result};
use r2_runner_core::providers::{apply_edits, formatting_edits};
use std::process::ExitCode;
use tracing::info;

use crate::utils::{read_source, resolve_path};

pub fn format_command(filepath: &str, write: bool) -> Result<ExitCode> {
    let path = resolve_path(filepath)?;
    let source = read_source(&path)?;
    let edits = formatting_edits(&source);

    if write {
        if !edits.is_empty() {
            std::fs::write(&path, apply_edits(&source, &edits))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        info!("formatted {} ({} line(s) changed)", path.display(), edits.len());
        return Ok(ExitCode::SUCCESS);
    }

    for edit in &edits {
        println!("{}: {}", edit.line + 1, edit.new_text);
    }
    Ok(ExitCode::SUCCESS)
}
