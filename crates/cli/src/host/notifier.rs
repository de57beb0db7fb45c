use r2_runner_core::interfaces::{GlobalState, Notifier};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Prints notifications: errors to stderr, information to stdout
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_error(&self, message: &str) {
        debug!("error shown: {}", message);
        eprintln!("❌ {message}");
    }

    fn show_info(&self, message: &str) {
        debug!("info shown: {}", message);
        println!("ℹ️  {message}");
    }
}

/// File name of the persisted flags, kept in the workspace root
pub const STATE_FILE_NAME: &str = ".r2-runner-state.json";

/// Flags persisted as a JSON object in a single file
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> BTreeMap<String, bool> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            debug!("ignoring unreadable state file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }
}

impl GlobalState for JsonStateStore {
    fn get_flag(&self, key: &str) -> Option<bool> {
        self.load().get(key).copied()
    }

    fn set_flag(&self, key: &str, value: bool) -> r2_runner_core::Result<()> {
        let mut flags = self.load();
        flags.insert(key.to_string(), value);
        std::fs::write(&self.path, serde_json::to_string_pretty(&flags)?)?;
        Ok(())
    }
}
