use anyhow::{Result, anyhow};
use r2_runner_core::{
    WelcomeChoice, WelcomeOutcome,
    welcome::WELCOME_MESSAGE,
};
use std::process::ExitCode;

use super::Session;
use crate::cli::GlobalArgs;

pub async fn welcome_command(global: &GlobalArgs, choice: Option<&str>) -> Result<ExitCode> {
    let session = Session::open(global, None)?;

    let Some(label) = choice else {
        if session.orchestrator.activate() {
            println!("{WELCOME_MESSAGE}");
            for choice in WelcomeChoice::ALL {
                println!("  • {}", choice.label());
            }
        }
        return Ok(ExitCode::SUCCESS);
    };

    let choice = WelcomeChoice::from_label(label)
        .ok_or_else(|| anyhow!("Unknown welcome choice '{}'", label))?;

    match session.orchestrator.handle_welcome(choice)? {
        WelcomeOutcome::NewDocument { content, .. } => println!("{content}"),
        WelcomeOutcome::OpenUrl(url) => println!("{url}"),
        WelcomeOutcome::ReplOpened(dispatch) => return Ok(session.finish(dispatch).await),
        WelcomeOutcome::Dismissed => println!("Welcome message dismissed"),
    }
    Ok(ExitCode::SUCCESS)
}
