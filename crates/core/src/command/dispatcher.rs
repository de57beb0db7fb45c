use crate::{
    command::RunRequest,
    interfaces::{Terminal, TerminalHost},
};
use std::sync::Arc;
use tracing::info;

/// Hands rendered commands to host terminals
pub struct CommandDispatcher {
    terminals: Arc<dyn TerminalHost>,
}

impl CommandDispatcher {
    pub fn new(terminals: Arc<dyn TerminalHost>) -> Self {
        Self { terminals }
    }

    /// Open a fresh terminal for `request`, show it and send the command line
    pub fn dispatch(&self, request: &RunRequest) -> Arc<dyn Terminal> {
        let terminal = self.terminals.create_terminal(&request.terminal_name());
        terminal.show();

        let command = request.to_shell_command();
        info!("Running: {} (in terminal '{}')", command, terminal.name());
        terminal.send_text(&command);
        terminal
    }

    /// An already open terminal with `name`, if any
    pub fn existing(&self, name: &str) -> Option<Arc<dyn Terminal>> {
        self.terminals.find_terminal(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::Operation,
        services::RecordingTerminalHost,
        types::{Origin, ResolvedExecutable},
    };

    #[test]
    fn test_dispatch_creates_shows_and_sends() {
        let host = Arc::new(RecordingTerminalHost::default());
        let dispatcher = CommandDispatcher::new(host.clone());

        let request = RunRequest {
            operation: Operation::RunAllTests,
            executable: ResolvedExecutable::new("r2test", Origin::SystemPath),
            args: Vec::new(),
            cwd: None,
            test_filter: None,
        };
        dispatcher.dispatch(&request);
        dispatcher.dispatch(&request);

        let terminals = host.terminals();
        assert_eq!(terminals.len(), 2);
        assert!(terminals.iter().all(|t| t.was_shown()));
        assert_eq!(terminals[0].lines(), vec!["r2test".to_string()]);
        assert!(dispatcher.existing("R2Lang Tests").is_some());
        assert!(dispatcher.existing("R2Lang REPL").is_none());
    }
}
