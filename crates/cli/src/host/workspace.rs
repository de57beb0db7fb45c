use r2_runner_core::{
    config::Config,
    interfaces::{Editor, Workspace},
};
use std::path::PathBuf;
use std::sync::Arc;

/// Workspace rooted at a directory, with at most one open editor
pub struct CliWorkspace {
    root: Option<PathBuf>,
    config: Config,
    editor: Option<Arc<dyn Editor>>,
}

impl CliWorkspace {
    pub fn new(root: Option<PathBuf>, config: Config) -> Self {
        Self {
            root,
            config,
            editor: None,
        }
    }

    pub fn with_editor(mut self, editor: Arc<dyn Editor>) -> Self {
        self.editor = Some(editor);
        self
    }
}

impl Workspace for CliWorkspace {
    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn config(&self) -> Config {
        self.config.clone()
    }

    fn active_editor(&self) -> Option<Arc<dyn Editor>> {
        self.editor.clone()
    }
}
