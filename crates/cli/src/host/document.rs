//! Documents and editors backed by files on disk

use anyhow::Result;
use r2_runner_core::{
    interfaces::{Document, Editor},
    types::{LANGUAGE_ID, SOURCE_EXTENSION, SourcePosition},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file read once from disk
pub struct FileDocument {
    path: PathBuf,
    language_id: String,
    text: String,
}

impl FileDocument {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = crate::utils::read_source(&path)?;
        Ok(Self::from_text(path, text))
    }

    /// Language is taken from the extension, as an editor would
    pub fn from_text(path: PathBuf, text: String) -> Self {
        let language_id = match path.extension().and_then(|e| e.to_str()) {
            Some(SOURCE_EXTENSION) => LANGUAGE_ID,
            _ => "plaintext",
        };
        Self {
            path,
            language_id: language_id.to_string(),
            text,
        }
    }

    /// Text of the 0-based inclusive line range
    pub fn lines(&self, start: usize, end: usize) -> String {
        self.text
            .split('\n')
            .skip(start)
            .take(end.saturating_sub(start) + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Document for FileDocument {
    fn file_name(&self) -> &Path {
        &self.path
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.text.split('\n').nth(line).map(str::to_string)
    }

    fn save(&self) -> r2_runner_core::Result<()> {
        // Contents came from disk and are never modified in memory
        debug!("{} is already saved", self.path.display());
        Ok(())
    }
}

pub struct CliEditor {
    document: FileDocument,
    cursor: SourcePosition,
    selection: String,
}

impl CliEditor {
    pub fn new(document: FileDocument) -> Self {
        Self {
            document,
            cursor: SourcePosition::default(),
            selection: String::new(),
        }
    }

    pub fn with_cursor(mut self, line: usize) -> Self {
        self.cursor = SourcePosition::new(line as u32, 0);
        self
    }

    /// Select whole lines, 0-based and inclusive
    pub fn with_line_selection(mut self, start: usize, end: usize) -> Self {
        self.selection = self.document.lines(start, end);
        self.cursor = SourcePosition::new(start as u32, 0);
        self
    }
}

impl Editor for CliEditor {
    fn document(&self) -> &dyn Document {
        &self.document
    }

    fn cursor(&self) -> SourcePosition {
        self.cursor
    }

    fn selected_text(&self) -> String {
        self.selection.clone()
    }
}
