use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where a resolved executable came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Absolute path taken verbatim from configuration
    Configured,
    /// Binary found directly under the workspace root
    ProjectRoot,
    /// Binary found under the tool subdirectory of the workspace root
    ProjectSubdir,
    /// Bare name or relative path left to the OS search path
    SystemPath,
    /// `go run main.go` inside the interpreter's own source checkout
    SourceCheckout,
}

/// The program chosen for a single run, test or REPL request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedExecutable {
    pub path: String,
    pub origin: Origin,
}

impl ResolvedExecutable {
    pub fn new(path: impl Into<String>, origin: Origin) -> Self {
        let path = path.into();
        debug_assert!(!path.is_empty());
        Self { path, origin }
    }

    /// A bare command has no path separators and is looked up on PATH
    pub fn is_bare_command(&self) -> bool {
        !self.path.contains('/') && !self.path.contains('\\')
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}
