//! Document and editor access
//!
//! The host owns the text model. The engine only reads lines and text and
//! asks for a save before handing a file path to an external process.

use crate::{
    error::Result,
    types::{LANGUAGE_ID, SourcePosition, is_test_file},
};
use std::path::Path;

/// Read access to one open document
pub trait Document: Send + Sync {
    /// Path or name identifying the document
    fn file_name(&self) -> &Path;

    /// Language classification assigned by the host
    fn language_id(&self) -> &str;

    fn text(&self) -> String;

    fn line_count(&self) -> usize;

    fn line_text(&self, line: usize) -> Option<String>;

    /// Persist the document, returning once it is on disk
    fn save(&self) -> Result<()>;

    fn is_r2lang(&self) -> bool {
        self.language_id() == LANGUAGE_ID
    }

    fn is_test_file(&self) -> bool {
        is_test_file(&self.file_name().to_string_lossy())
    }
}

/// The active editor: a document plus cursor and selection
pub trait Editor: Send + Sync {
    fn document(&self) -> &dyn Document;

    fn cursor(&self) -> SourcePosition;

    /// Selected text, empty when nothing is selected
    fn selected_text(&self) -> String;

    fn has_selection(&self) -> bool {
        !self.selected_text().is_empty()
    }

    /// Text of the line holding the cursor
    fn current_line(&self) -> String {
        self.document()
            .line_text(self.cursor().line as usize)
            .unwrap_or_default()
    }
}
