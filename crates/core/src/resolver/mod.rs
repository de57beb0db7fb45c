//! Executable resolution
//!
//! Every step of the chain is a plain existence check through
//! [`FileSystem`]; nothing is cached, so a binary built between two runs is
//! picked up by the second one.

use crate::{
    config::{Config, DEFAULT_EXECUTABLE, DEFAULT_REPL_EXECUTABLE},
    interfaces::FileSystem,
    types::{Origin, ResolvedExecutable},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Default test runner name, looked up on PATH as the last resort
pub const TEST_EXECUTABLE: &str = "r2test";

/// Platform executable suffix, checked alongside the bare name
pub const EXECUTABLE_SUFFIX: &str = ".exe";

/// Subdirectory of the workspace root where the test runner is built
pub const TOOL_SUBDIR: &[&str] = &["cmd", "r2test"];

/// Presence of this file marks the interpreter's own source checkout
pub const SOURCE_CHECKOUT_MARKER: &str = "main.go";

/// Program used to run the interpreter from a source checkout
pub const SOURCE_CHECKOUT_PROGRAM: &str = "go";

pub struct ExecutableResolver {
    fs: Arc<dyn FileSystem>,
}

impl ExecutableResolver {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Resolve the test runner.
    ///
    /// 1. configured absolute path, used verbatim
    /// 2. `r2test` or `r2test.exe` directly under the workspace root
    /// 3. the same names under `cmd/r2test`
    /// 4. configured path if non-empty, else `r2test`, left to PATH lookup
    pub fn resolve_test_runner(
        &self,
        config: &Config,
        workspace_root: Option<&Path>,
    ) -> ResolvedExecutable {
        let configured = config.test_executable_path.as_str();

        if !configured.is_empty() && Path::new(configured).is_absolute() {
            debug!("using configured test runner {}", configured);
            return ResolvedExecutable::new(configured, Origin::Configured);
        }

        if let Some(root) = workspace_root {
            if let Some(path) = self.first_existing(root) {
                return ResolvedExecutable::new(path_string(&path), Origin::ProjectRoot);
            }

            let tool_dir = TOOL_SUBDIR.iter().fold(root.to_path_buf(), |dir, part| dir.join(part));
            if let Some(path) = self.first_existing(&tool_dir) {
                return ResolvedExecutable::new(path_string(&path), Origin::ProjectSubdir);
            }
        }

        let name = if configured.is_empty() {
            TEST_EXECUTABLE
        } else {
            configured
        };
        debug!("falling back to {} on PATH", name);
        ResolvedExecutable::new(name, Origin::SystemPath)
    }

    /// Resolve the interpreter used to run files and selections
    pub fn resolve_runner(&self, config: &Config, workspace_root: Option<&Path>) -> ResolvedExecutable {
        self.resolve_interpreter(&config.executable_path, DEFAULT_EXECUTABLE, workspace_root)
    }

    /// Resolve the interactive REPL
    pub fn resolve_repl(&self, config: &Config, workspace_root: Option<&Path>) -> ResolvedExecutable {
        self.resolve_interpreter(&config.repl_executable_path, DEFAULT_REPL_EXECUTABLE, workspace_root)
    }

    /// The workspace root, if it is the interpreter's own source checkout
    pub fn source_checkout(&self, workspace_root: Option<&Path>) -> Option<PathBuf> {
        let root = workspace_root?;
        self.fs
            .exists(&root.join(SOURCE_CHECKOUT_MARKER))
            .then(|| root.to_path_buf())
    }

    fn resolve_interpreter(
        &self,
        configured: &str,
        default: &str,
        workspace_root: Option<&Path>,
    ) -> ResolvedExecutable {
        if self.source_checkout(workspace_root).is_some() {
            return ResolvedExecutable::new(SOURCE_CHECKOUT_PROGRAM, Origin::SourceCheckout);
        }
        if configured.is_empty() {
            return ResolvedExecutable::new(default, Origin::SystemPath);
        }
        let origin = if Path::new(configured).is_absolute() {
            Origin::Configured
        } else {
            Origin::SystemPath
        };
        ResolvedExecutable::new(configured, origin)
    }

    fn first_existing(&self, dir: &Path) -> Option<PathBuf> {
        [
            dir.join(TEST_EXECUTABLE),
            dir.join(format!("{TEST_EXECUTABLE}{EXECUTABLE_SUFFIX}")),
        ]
        .into_iter()
        .find(|candidate| self.fs.exists(candidate))
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
