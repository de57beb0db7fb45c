use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{
    analyze_command, format_command, hover_command, init_command, locate_command, run_command,
    welcome_command, RunTarget,
};

#[derive(Parser, Debug)]
#[command(name = "r2-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Print commands instead of running them
    #[arg(short = 'd', long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short = 'w', long = "workspace", global = true)]
    pub workspace: Option<PathBuf>,

    /// Interpreter used to run files and selections
    #[arg(long = "executable", global = true)]
    pub executable: Option<String>,

    /// Interactive REPL executable
    #[arg(long = "repl-executable", global = true)]
    pub repl_executable: Option<String>,

    /// Test runner executable
    #[arg(long = "test-executable", global = true)]
    pub test_executable: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List test suites and cases declared in a file
    #[command(visible_alias = "a")]
    Analyze {
        /// Path to the R2Lang file
        filepath: String,

        /// Print code lenses as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the function around a line (e.g., calc.r2:12)
    Locate {
        filepath: String,
    },
    /// Run an R2Lang file
    #[command(visible_alias = "r")]
    Run {
        filepath: String,
    },
    /// Run a range of lines from a file
    RunSelection {
        filepath: String,

        /// 1-based inclusive line range (e.g., 3-7)
        #[arg(short, long)]
        lines: String,
    },
    /// Open the interactive REPL
    Repl,
    /// Send code to the REPL: a line range, the line at the cursor, or its function
    Feed {
        /// Path with cursor line (e.g., calc.r2:12)
        filepath: String,

        /// 1-based inclusive line range (e.g., 3-7)
        #[arg(short, long)]
        lines: Option<String>,
    },
    /// Run all tests in the workspace
    #[command(visible_alias = "t")]
    Test {
        /// Collect coverage in html and json formats
        #[arg(long)]
        coverage: bool,
    },
    /// Run the tests next to a `_test.r2` file
    TestFile {
        filepath: String,
    },
    /// Run a single suite or case by name
    TestOne {
        name: String,
        filepath: String,
    },
    /// Trim surrounding whitespace from every line
    Format {
        filepath: String,

        /// Rewrite the file instead of printing the edits
        #[arg(long)]
        write: bool,
    },
    /// Show keyword documentation at a position (e.g., calc.r2:3:5)
    Hover {
        filepath: String,
    },
    /// Show the welcome prompt or act on one of its choices
    Welcome {
        /// One of: "Create New File", "Open REPL", "View Examples", "Don't show again"
        #[arg(long)]
        choice: Option<String>,
    },
    /// Write a default configuration file into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the command
    pub async fn execute(self) -> Result<ExitCode> {
        let global = self.global;
        match self.command {
            Commands::Analyze { filepath, json } => analyze_command(&global, &filepath, json),
            Commands::Locate { filepath } => locate_command(&global, &filepath),
            Commands::Run { filepath } => run_command(&global, RunTarget::File(filepath)).await,
            Commands::RunSelection { filepath, lines } => {
                run_command(&global, RunTarget::Selection { filepath, lines }).await
            }
            Commands::Repl => run_command(&global, RunTarget::Repl).await,
            Commands::Feed { filepath, lines } => {
                run_command(&global, RunTarget::Feed { filepath, lines }).await
            }
            Commands::Test { coverage } => run_command(&global, RunTarget::Tests { coverage }).await,
            Commands::TestFile { filepath } => run_command(&global, RunTarget::TestFile(filepath)).await,
            Commands::TestOne { name, filepath } => {
                run_command(&global, RunTarget::NamedTest { name, filepath }).await
            }
            Commands::Format { filepath, write } => format_command(&filepath, write),
            Commands::Hover { filepath } => hover_command(&filepath),
            Commands::Welcome { choice } => welcome_command(&global, choice.as_deref()).await,
            Commands::Init { force } => init_command(&global, force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["r2-runner", "test", "--coverage", "--dry-run"]);
        assert!(cli.global.dry_run);
        assert!(matches!(cli.command, Commands::Test { coverage: true }));
    }

    #[test]
    fn test_test_one_arguments() {
        let cli = Cli::parse_from([
            "r2-runner",
            "--test-executable",
            "/opt/r2test",
            "test-one",
            "adds numbers",
            "calc_test.r2",
        ]);
        assert_eq!(cli.global.test_executable.as_deref(), Some("/opt/r2test"));
        match cli.command {
            Commands::TestOne { name, filepath } => {
                assert_eq!(name, "adds numbers");
                assert_eq!(filepath, "calc_test.r2");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
