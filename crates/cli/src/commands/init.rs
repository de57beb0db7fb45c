use anyhow::{Result, bail};
use r2_runner_core::config::CONFIG_FILE_NAMES;
use std::process::ExitCode;
use tracing::info;

use super::{load_config, workspace_root};
use crate::cli::GlobalArgs;

/// Write the effective configuration to `.r2-runner.json` in the workspace root
pub fn init_command(global: &GlobalArgs, force: bool) -> Result<ExitCode> {
    let root = workspace_root(global)?;
    let config_path = root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "{} already exists, use --force to overwrite",
            config_path.display()
        );
    }

    let config = load_config(global, &root)?;
    config.save_to_file(&config_path)?;
    info!("wrote {}", config_path.display());
    println!("✅ Created {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}
