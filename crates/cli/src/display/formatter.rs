use r2_runner_core::{CodeLens, DeclarationKind};

/// One-line summary of a lens, e.g. `3. 🧪 Test 'adds' (line 4)`
pub fn format_code_lens(index: usize, lens: &CodeLens) -> String {
    let kind = match lens.declaration.kind {
        DeclarationKind::Suite => "📦 Suite",
        DeclarationKind::Case => "🧪 Test",
    };
    format!(
        "{}. {} '{}' (line {})",
        index, kind, lens.declaration.name, lens.declaration.line
    )
}

pub fn print_code_lens(index: usize, lens: &CodeLens) {
    println!("{}", format_code_lens(index, lens));
    println!("   🏷️  Lens: {}", lens.title);
    println!("   🔗 Command: {} {:?}", lens.command, lens.arguments);
}
