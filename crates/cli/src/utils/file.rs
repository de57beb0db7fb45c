use anyhow::{Context, Result};
use r2_runner_core::types::{SOURCE_EXTENSION, is_test_file};
use std::path::{Path, PathBuf};

/// Determine the type of file for display purposes
pub fn determine_file_type(path: &Path) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if is_test_file(file_name) {
        "🧪 R2Lang test file".to_string()
    } else if file_name == "main.go" {
        "🐹 interpreter entry point".to_string()
    } else if path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION) {
        "📄 R2Lang source".to_string()
    } else {
        "📄 file".to_string()
    }
}

/// Make `path` absolute against the current directory
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("File not found: {}", path.display()))
}
