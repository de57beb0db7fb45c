use crate::types::{Origin, ResolvedExecutable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-invokable operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    RunFile,
    RunSelection,
    OpenRepl,
    RunAllTests,
    RunCurrentTestFile,
    RunWithCoverage,
    RunNamedTest,
    FeedRepl,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::RunFile,
        Operation::RunSelection,
        Operation::OpenRepl,
        Operation::RunAllTests,
        Operation::RunCurrentTestFile,
        Operation::RunWithCoverage,
        Operation::RunNamedTest,
        Operation::FeedRepl,
    ];

    /// Host command id the operation is registered under
    pub fn command_id(self) -> &'static str {
        match self {
            Operation::RunFile => "r2lang.runFile",
            Operation::RunSelection => "r2lang.runSelection",
            Operation::OpenRepl => "r2lang.openRepl",
            Operation::RunAllTests => "r2lang.runTests",
            Operation::RunCurrentTestFile => "r2lang.runCurrentTest",
            Operation::RunWithCoverage => "r2lang.runTestsWithCoverage",
            Operation::RunNamedTest => "r2lang.runIndividualTest",
            Operation::FeedRepl => "r2lang.runInRepl",
        }
    }

    pub fn terminal_name(self) -> &'static str {
        match self {
            Operation::RunFile => "R2Lang",
            Operation::RunSelection => "R2Lang Selection",
            Operation::OpenRepl | Operation::FeedRepl => "R2Lang REPL",
            Operation::RunAllTests => "R2Lang Tests",
            Operation::RunCurrentTestFile => "R2Lang Current Test",
            Operation::RunWithCoverage => "R2Lang Tests with Coverage",
            Operation::RunNamedTest => "R2Lang Test",
        }
    }
}

/// A fully resolved command, built fresh for one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub operation: Operation,
    pub executable: ResolvedExecutable,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    /// Name filter for a single test run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_filter: Option<String>,
}

impl RunRequest {
    pub fn terminal_name(&self) -> String {
        match (&self.operation, &self.test_filter) {
            (Operation::RunNamedTest, Some(name)) => {
                format!("{}: {}", self.operation.terminal_name(), name)
            }
            (operation, _) => operation.terminal_name().to_string(),
        }
    }

    /// Render as one line for a shell, quoting anything that needs it
    pub fn to_shell_command(&self) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(shell_words::quote(&self.executable.path).into_owned());
        words.extend(self.args.iter().map(|arg| shell_words::quote(arg).into_owned()));
        let command = words.join(" ");

        match &self.cwd {
            Some(dir) => format!(
                "cd {} && {}",
                shell_words::quote(&dir.to_string_lossy()),
                command
            ),
            None => command,
        }
    }

    pub fn is_source_checkout(&self) -> bool {
        self.executable.origin == Origin::SourceCheckout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(executable: &str, args: &[&str]) -> RunRequest {
        RunRequest {
            operation: Operation::RunFile,
            executable: ResolvedExecutable::new(executable, Origin::SystemPath),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            cwd: None,
            test_filter: None,
        }
    }

    #[test]
    fn test_shell_command_plain() {
        let cmd = request("r2lang", &["/work/main.r2"]).to_shell_command();
        insta::assert_snapshot!(cmd, @"r2lang /work/main.r2");
    }

    #[test]
    fn test_shell_command_quotes_spaces() {
        let cmd = request("/opt/my tools/r2lang", &["/work/my file.r2"]).to_shell_command();
        insta::assert_snapshot!(cmd, @"'/opt/my tools/r2lang' '/work/my file.r2'");
    }

    #[test]
    fn test_shell_command_quotes_metacharacters() {
        let cmd = request("r2test", &["-grep", "adds $1; rm -rf", "."]).to_shell_command();
        insta::assert_snapshot!(cmd, @"r2test -grep 'adds $1; rm -rf' .");
    }

    #[test]
    fn test_shell_command_with_cwd() {
        let mut request = request("go", &["run", "main.go", "-repl"]);
        request.cwd = Some(PathBuf::from("/src/go-r2lang"));
        insta::assert_snapshot!(request.to_shell_command(), @"cd /src/go-r2lang && go run main.go -repl");
    }

    #[test]
    fn test_terminal_names() {
        let mut request = request("r2test", &[]);
        assert_eq!(request.terminal_name(), "R2Lang");

        request.operation = Operation::RunNamedTest;
        request.test_filter = Some("adds".to_string());
        assert_eq!(request.terminal_name(), "R2Lang Test: adds");

        request.operation = Operation::FeedRepl;
        assert_eq!(request.terminal_name(), "R2Lang REPL");
    }

    #[test]
    fn test_command_ids_are_unique() {
        let mut ids: Vec<_> = Operation::ALL.iter().map(|op| op.command_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Operation::ALL.len());
    }
}
