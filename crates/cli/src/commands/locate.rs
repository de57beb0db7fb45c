use anyhow::Result;
use std::process::ExitCode;

use super::Session;
use crate::cli::GlobalArgs;
use crate::utils::{parse_filepath_with_line, read_source, resolve_path};

pub fn locate_command(global: &GlobalArgs, filepath_arg: &str) -> Result<ExitCode> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let line = line.unwrap_or(0);
    let source = read_source(&resolve_path(&filepath)?)?;
    let session = Session::open(global, None)?;

    match session.orchestrator.enclosing_function(&source, line as u32) {
        Some(span) => {
            println!(
                "📍 {}:{}-{}",
                filepath,
                span.start_line + 1,
                span.end_line + 1
            );
            println!("{}", span.extract(&source));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No function found around line {}", line + 1);
            Ok(ExitCode::FAILURE)
        }
    }
}
