use serde::{Deserialize, Serialize};

/// Represents a position in a text document using 0-based line and column indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Inclusive line range of a function, signature line included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: u32,
    pub end_line: u32,
}

impl SourceSpan {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        debug_assert!(end_line >= start_line);
        Self {
            start_line,
            end_line,
        }
    }

    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    /// Extract the covered lines from `text`, joined with `\n`
    pub fn extract(&self, text: &str) -> String {
        text.split('\n')
            .skip(self.start_line as usize)
            .take(self.line_count() as usize)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
