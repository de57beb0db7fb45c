use anyhow::{Result, anyhow};
use r2_runner_core::{providers::hover, types::SourcePosition};
use std::process::ExitCode;

use crate::utils::{parse_filepath_with_position, read_source, resolve_path};

pub fn hover_command(filepath_arg: &str) -> Result<ExitCode> {
    let (filepath, position) = parse_filepath_with_position(filepath_arg);
    let (line, column) =
        position.ok_or_else(|| anyhow!("Expected <file>:<line>:<column>, got '{}'", filepath_arg))?;
    let source = read_source(&resolve_path(&filepath)?)?;

    match hover(&source, SourcePosition::new(line as u32, column as u32)) {
        Some(hover) => {
            println!("{}", hover.contents);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
