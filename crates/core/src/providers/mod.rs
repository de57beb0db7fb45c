//! Editor language features that need no process at all

pub mod format;
pub mod hover;

pub use format::{TextEdit, apply_edits, formatting_edits};
pub use hover::{Hover, hover, keyword_info, word_at};
