use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a declaration groups tests or is a single test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Suite,
    Case,
}

/// A `describe(...)` or `it(...)` call found on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// 1-based line number
    pub line: u32,
}

impl TestDeclaration {
    /// Zero-based line index, for hosts that address lines from 0
    pub fn line_index(&self) -> u32 {
        self.line.saturating_sub(1)
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            DeclarationKind::Suite => "▶️ Run Test Suite",
            DeclarationKind::Case => "▶️ Run Test",
        }
    }
}

/// A clickable "run this" affordance rendered above a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLens {
    /// Zero-based line the lens is anchored to
    pub line: u32,
    pub title: String,
    pub command: String,
    pub arguments: Vec<String>,
    pub declaration: TestDeclaration,
    pub file_path: PathBuf,
}
