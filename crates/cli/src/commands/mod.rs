pub mod analyze;
pub mod format;
pub mod hover;
pub mod init;
pub mod locate;
pub mod run;
pub mod welcome;

pub use analyze::analyze_command;
pub use format::format_command;
pub use hover::hover_command;
pub use init::init_command;
pub use locate::locate_command;
pub use run::{RunTarget, run_command};
pub use welcome::welcome_command;

use anyhow::{Context, Result};
use r2_runner_core::{Config, Dispatch, Orchestrator, interfaces::Editor};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::host::CliHost;

/// Workspace root from `--workspace`, or the current directory
pub fn workspace_root(global: &GlobalArgs) -> Result<PathBuf> {
    let root = match &global.workspace {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => std::env::current_dir()?.join(path),
        None => std::env::current_dir()?,
    };
    Ok(root)
}

/// Configuration file values, overridden by command line flags
pub fn load_config(global: &GlobalArgs, root: &std::path::Path) -> Result<Config> {
    let mut config = Config::discover(root)
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

    if let Some(path) = &global.executable {
        config.executable_path = path.clone();
    }
    if let Some(path) = &global.repl_executable {
        config.repl_executable_path = path.clone();
    }
    if let Some(path) = &global.test_executable {
        config.test_executable_path = path.clone();
    }
    debug!("effective config: {:?}", config);
    Ok(config)
}

/// One CLI invocation: a host, its orchestrator and the root they share
pub struct Session {
    pub root: PathBuf,
    pub cli_host: CliHost,
    pub orchestrator: Orchestrator,
}

impl Session {
    pub fn open(global: &GlobalArgs, editor: Option<Arc<dyn Editor>>) -> Result<Self> {
        let root = workspace_root(global)?;
        let config = load_config(global, &root)?;
        let cli_host = CliHost::new(root.clone(), config, editor, global.dry_run);
        let orchestrator = Orchestrator::new(cli_host.host.clone())?;

        Ok(Self {
            root,
            cli_host,
            orchestrator,
        })
    }

    /// Run a registered command to completion.
    ///
    /// Fails with exit code 1 when the command was aborted, otherwise
    /// reports the first failing terminal's exit code.
    pub async fn run(&self, command_id: &str, args: &[String]) -> ExitCode {
        match self.orchestrator.execute(command_id, args) {
            Some(dispatch) => self.finish(dispatch).await,
            None => ExitCode::FAILURE,
        }
    }

    pub async fn finish(&self, dispatch: Dispatch) -> ExitCode {
        dispatch.settle().await;
        let code = self.cli_host.terminals.clone().shutdown().await;
        ExitCode::from(u8::try_from(code).unwrap_or(1))
    }
}
