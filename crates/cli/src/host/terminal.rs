//! Terminals backed by a `sh` process, or by stdout in dry-run mode

use r2_runner_core::interfaces::{Terminal, TerminalHost};
use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A named shell session. The shell is started on the first line sent.
pub struct ConsoleTerminal {
    name: String,
    dry_run: bool,
    shell: Mutex<Option<Child>>,
}

impl ConsoleTerminal {
    fn new(name: &str, dry_run: bool) -> Self {
        Self {
            name: name.to_string(),
            dry_run,
            shell: Mutex::new(None),
        }
    }

    fn write_line(&self, text: &str) -> std::io::Result<()> {
        let mut shell = lock(&self.shell);
        if shell.is_none() {
            debug!("starting shell for terminal '{}'", self.name);
            *shell = Some(Command::new("sh").stdin(Stdio::piped()).spawn()?);
        }

        let stdin = shell
            .as_mut()
            .and_then(|child| child.stdin.as_mut())
            .ok_or_else(|| std::io::Error::other("terminal input is closed"))?;
        writeln!(stdin, "{text}")?;
        stdin.flush()
    }

    /// Close the shell's input and wait for it to exit
    pub fn close(&self) -> Option<i32> {
        let mut child = lock(&self.shell).take()?;
        drop(child.stdin.take());
        match child.wait() {
            Ok(status) => status.code(),
            Err(e) => {
                warn!("failed to wait for terminal '{}': {}", self.name, e);
                None
            }
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&self) {
        eprintln!("▶ {}", self.name);
    }

    fn send_text(&self, text: &str) {
        if self.dry_run {
            println!("{text}");
            return;
        }
        if let Err(e) = self.write_line(text) {
            warn!("failed to send to terminal '{}': {}", self.name, e);
        }
    }
}

#[derive(Default)]
pub struct ConsoleTerminalHost {
    dry_run: bool,
    terminals: Mutex<Vec<Arc<ConsoleTerminal>>>,
}

impl ConsoleTerminalHost {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            terminals: Mutex::new(Vec::new()),
        }
    }

    pub fn terminal(&self, name: &str) -> Option<Arc<ConsoleTerminal>> {
        lock(&self.terminals)
            .iter()
            .rev()
            .find(|terminal| terminal.name == name)
            .cloned()
    }

    /// Close every shell, returning the first non-zero exit code
    pub fn close_all(&self) -> i32 {
        let terminals: Vec<_> = lock(&self.terminals).drain(..).collect();
        terminals
            .iter()
            .filter_map(|terminal| terminal.close())
            .find(|code| *code != 0)
            .unwrap_or(0)
    }

    /// [`close_all`](Self::close_all) on the blocking pool, for async callers
    pub async fn shutdown(self: Arc<Self>) -> i32 {
        match tokio::task::spawn_blocking(move || self.close_all()).await {
            Ok(code) => code,
            Err(e) => {
                warn!("failed to close terminals: {}", e);
                1
            }
        }
    }
}

impl TerminalHost for ConsoleTerminalHost {
    fn create_terminal(&self, name: &str) -> Arc<dyn Terminal> {
        let terminal = Arc::new(ConsoleTerminal::new(name, self.dry_run));
        lock(&self.terminals).push(terminal.clone());
        terminal
    }

    fn find_terminal(&self, name: &str) -> Option<Arc<dyn Terminal>> {
        self.terminal(name).map(|terminal| terminal as Arc<dyn Terminal>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_latest_terminal() {
        let host = ConsoleTerminalHost::new(true);
        host.create_terminal("R2Lang REPL");
        host.create_terminal("R2Lang Tests");

        let found = host.find_terminal("R2Lang REPL").unwrap();
        assert_eq!(found.name(), "R2Lang REPL");
        assert!(host.find_terminal("R2Lang").is_none());
    }

    #[test]
    fn test_shell_exit_code() {
        let host = ConsoleTerminalHost::new(false);
        let terminal = host.create_terminal("R2Lang");
        terminal.send_text("exit 3");
        assert_eq!(host.close_all(), 3);
        assert_eq!(host.close_all(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_waits_off_the_runtime() {
        let host = Arc::new(ConsoleTerminalHost::new(false));
        host.create_terminal("R2Lang").send_text("sleep 0.5; exit 4");
        host.create_terminal("R2Lang Tests").send_text("exit 0");

        // Single-threaded runtime: a blocking wait would hold the thread past the timer
        let shutdown = tokio::spawn(host.clone().shutdown());
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!shutdown.is_finished());

        assert_eq!(shutdown.await.unwrap(), 4);
        assert_eq!(host.shutdown().await, 0);
    }

    #[test]
    fn test_dry_run_spawns_nothing() {
        let host = ConsoleTerminalHost::new(true);
        host.create_terminal("R2Lang").send_text("r2lang main.r2");
        assert_eq!(host.close_all(), 0);
    }
}
