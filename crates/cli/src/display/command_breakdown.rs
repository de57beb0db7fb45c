use r2_runner_core::{Origin, RunRequest};

fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Configured => "configured path",
        Origin::ProjectRoot => "workspace root",
        Origin::ProjectSubdir => "workspace cmd/r2test",
        Origin::SystemPath => "PATH lookup",
        Origin::SourceCheckout => "source checkout",
    }
}

pub fn print_command_breakdown(request: &RunRequest) {
    println!("   🔧 Command breakdown:");
    println!("      • terminal: {}", request.terminal_name());
    println!(
        "      • executable: {} ({})",
        request.executable.path,
        origin_label(request.executable.origin)
    );

    if let Some(filter) = &request.test_filter {
        println!("      • testFilter: {}", filter);
    }

    if let Some(dir) = &request.cwd {
        println!("      • workingDir: {}", dir.display());
    }

    if !request.args.is_empty() {
        println!("      • args: {:?}", request.args);
    }

    println!("   🚀 {}", request.to_shell_command());
}
