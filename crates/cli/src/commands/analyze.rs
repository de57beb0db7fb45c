use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

use super::Session;
use crate::cli::GlobalArgs;
use crate::display::{print_code_lens, print_command_breakdown};
use crate::utils::{determine_file_type, read_source, resolve_path};

pub fn analyze_command(global: &GlobalArgs, filepath: &str, json: bool) -> Result<ExitCode> {
    debug!("Analyzing file: {}", filepath);

    let path = resolve_path(filepath)?;
    let source = read_source(&path)?;
    let session = Session::open(global, None)?;
    let lenses = session.orchestrator.code_lenses(&path, &source);

    if json {
        println!("{}", serde_json::to_string_pretty(&lenses)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("🔍 Analyzing: {}", filepath);
    println!("{}", "=".repeat(80));
    println!("   📦 Type: {}", determine_file_type(&path));
    println!("   📏 Lines: {}", source.split('\n').count());

    if lenses.is_empty() {
        println!("\nNo test declarations found.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("\n🧪 Found {} test declaration(s):", lenses.len());
    for (index, lens) in lenses.iter().enumerate() {
        println!();
        print_code_lens(index + 1, lens);
        let request = session
            .orchestrator
            .named_test_request(&lens.declaration.name, &lens.file_path);
        print_command_breakdown(&request);
    }

    Ok(ExitCode::SUCCESS)
}
