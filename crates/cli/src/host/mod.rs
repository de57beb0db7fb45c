//! Terminal host: every engine interface implemented against the real system

pub mod document;
pub mod fs;
pub mod notifier;
pub mod probe;
pub mod terminal;
pub mod workspace;

pub use document::{CliEditor, FileDocument};
pub use fs::OsFileSystem;
pub use notifier::{ConsoleNotifier, JsonStateStore, STATE_FILE_NAME};
pub use probe::ProcessProbe;
pub use terminal::{ConsoleTerminal, ConsoleTerminalHost};
pub use workspace::CliWorkspace;

use r2_runner_core::{config::Config, interfaces::Editor, Host};
use std::path::PathBuf;
use std::sync::Arc;

/// A [`Host`] plus the handles the CLI needs after dispatch
pub struct CliHost {
    pub host: Host,
    pub terminals: Arc<ConsoleTerminalHost>,
}

impl CliHost {
    pub fn new(
        root: PathBuf,
        config: Config,
        editor: Option<Arc<dyn Editor>>,
        dry_run: bool,
    ) -> Self {
        let mut workspace = CliWorkspace::new(Some(root.clone()), config);
        if let Some(editor) = editor {
            workspace = workspace.with_editor(editor);
        }
        let terminals = Arc::new(ConsoleTerminalHost::new(dry_run));

        let host = Host {
            workspace: Arc::new(workspace),
            fs: Arc::new(OsFileSystem),
            terminals: terminals.clone(),
            probe: Arc::new(ProcessProbe),
            notifier: Arc::new(ConsoleNotifier),
            state: Arc::new(JsonStateStore::new(root.join(STATE_FILE_NAME))),
        };

        Self { host, terminals }
    }
}
