use crate::{
    command::{Operation, RunRequest},
    resolver::SOURCE_CHECKOUT_MARKER,
    types::{Origin, ResolvedExecutable},
};
use std::path::PathBuf;
use tracing::debug;

/// Flags asking the test runner for coverage in human and machine formats
pub const COVERAGE_ARGS: [&str; 3] = ["-coverage", "-coverage-formats", "html,json"];

/// Flag preceding a test name filter
pub const TEST_FILTER_FLAG: &str = "-grep";

/// Flag starting the interpreter in REPL mode from a source checkout
pub const REPL_FLAG: &str = "-repl";

/// Flag suppressing the REPL banner and echo, used when feeding code
pub const QUIET_REPL_FLAG: &str = "-no-output";

/// Builds a [`RunRequest`] for one operation
pub struct CommandBuilder {
    operation: Operation,
    executable: ResolvedExecutable,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    test_filter: Option<String>,
}

impl CommandBuilder {
    pub fn new(operation: Operation, executable: ResolvedExecutable) -> Self {
        Self {
            operation,
            executable,
            args: Vec::new(),
            cwd: None,
            test_filter: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn with_test_filter(mut self, name: impl Into<String>) -> Self {
        self.test_filter = Some(name.into());
        self
    }

    pub fn build(self) -> RunRequest {
        let mut args = Vec::new();

        // A source checkout runs the interpreter through `go run main.go`
        if self.executable.origin == Origin::SourceCheckout {
            args.push("run".to_string());
            args.push(SOURCE_CHECKOUT_MARKER.to_string());
        }

        if let Some(ref name) = self.test_filter {
            args.push(TEST_FILTER_FLAG.to_string());
            args.push(name.clone());
        }

        args.extend(self.args);

        let request = RunRequest {
            operation: self.operation,
            executable: self.executable,
            args,
            cwd: self.cwd,
            test_filter: self.test_filter,
        };
        debug!(
            "built {:?} request: {}",
            request.operation,
            request.to_shell_command()
        );
        request
    }
}
