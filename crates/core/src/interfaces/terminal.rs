//! Terminals and process probes
//!
//! Once text is sent to a terminal the engine is done with it: exit codes and
//! output belong to the host.

use async_trait::async_trait;
use std::sync::Arc;

/// A named interactive terminal
pub trait Terminal: Send + Sync {
    fn name(&self) -> &str;

    fn show(&self);

    /// Send one line of input, newline appended by the terminal
    fn send_text(&self, text: &str);
}

pub trait TerminalHost: Send + Sync {
    fn create_terminal(&self, name: &str) -> Arc<dyn Terminal>;

    /// Look up an already open terminal by name
    fn find_terminal(&self, name: &str) -> Option<Arc<dyn Terminal>>;
}

/// Non-blocking check that an external command can be started
#[async_trait]
pub trait CommandProbe: Send + Sync {
    /// True when `program args...` starts and exits successfully
    async fn probe(&self, program: &str, args: &[String]) -> bool;
}
