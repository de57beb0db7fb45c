use async_trait::async_trait;
use r2_runner_core::interfaces::CommandProbe;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Starts the program with its output discarded and checks the exit status
pub struct ProcessProbe;

#[async_trait]
impl CommandProbe for ProcessProbe {
    async fn probe(&self, program: &str, args: &[String]) -> bool {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                debug!("probe of {} failed: {}", program, e);
                false
            }
        }
    }
}
