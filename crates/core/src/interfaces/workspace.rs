//! Workspace and configuration access

use crate::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

use super::Editor;

pub trait Workspace: Send + Sync {
    /// Zero or one root folder
    fn root(&self) -> Option<PathBuf>;

    /// Current settings; read on every operation so edits apply immediately
    fn config(&self) -> Config;

    fn active_editor(&self) -> Option<Arc<dyn Editor>>;
}
