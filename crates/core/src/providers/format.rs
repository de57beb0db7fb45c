//! Whitespace-trimming document formatter

use serde::{Deserialize, Serialize};

/// Whole-line replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// 0-based line index
    pub line: u32,
    pub new_text: String,
}

/// One edit per non-blank line that has surrounding whitespace
pub fn formatting_edits(text: &str) -> Vec<TextEdit> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            (!trimmed.is_empty() && trimmed != line).then(|| TextEdit {
                line: index as u32,
                new_text: trimmed.to_string(),
            })
        })
        .collect()
}

/// Apply whole-line edits, ignoring any that point past the last line
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    for edit in edits {
        if let Some(line) = lines.get_mut(edit.line as usize) {
            *line = &edit.new_text;
        }
    }
    lines.join("\n")
}
