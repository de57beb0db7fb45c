use anyhow::{Context, Result, anyhow};
use r2_runner_core::{
    Operation,
    interfaces::{Editor, Terminal},
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::Session;
use crate::cli::GlobalArgs;
use crate::display::print_command_breakdown;
use crate::host::{CliEditor, FileDocument};
use crate::utils::{parse_filepath_with_line, parse_line_range, resolve_path};

/// What a run-style subcommand asks for
#[derive(Debug, Clone)]
pub enum RunTarget {
    File(String),
    Selection { filepath: String, lines: String },
    Repl,
    Feed { filepath: String, lines: Option<String> },
    Tests { coverage: bool },
    TestFile(String),
    NamedTest { name: String, filepath: String },
}

impl RunTarget {
    pub fn operation(&self) -> Operation {
        match self {
            RunTarget::File(_) => Operation::RunFile,
            RunTarget::Selection { .. } => Operation::RunSelection,
            RunTarget::Repl => Operation::OpenRepl,
            RunTarget::Feed { .. } => Operation::FeedRepl,
            RunTarget::Tests { coverage: false } => Operation::RunAllTests,
            RunTarget::Tests { coverage: true } => Operation::RunWithCoverage,
            RunTarget::TestFile(_) => Operation::RunCurrentTestFile,
            RunTarget::NamedTest { .. } => Operation::RunNamedTest,
        }
    }

    /// The editor state this target implies, if it needs one
    fn editor(&self) -> Result<Option<Arc<dyn Editor>>> {
        let editor = match self {
            RunTarget::File(filepath) | RunTarget::TestFile(filepath) => {
                CliEditor::new(FileDocument::load(resolve_path(filepath)?)?)
            }
            RunTarget::Selection { filepath, lines } => {
                let (start, end) = parse_range(lines)?;
                CliEditor::new(FileDocument::load(resolve_path(filepath)?)?)
                    .with_line_selection(start, end)
            }
            RunTarget::Feed { filepath, lines } => {
                let (path, line) = parse_filepath_with_line(filepath);
                let editor =
                    CliEditor::new(FileDocument::load(resolve_path(&path)?)?).with_cursor(line.unwrap_or(0));
                match lines {
                    Some(lines) => {
                        let (start, end) = parse_range(lines)?;
                        editor.with_line_selection(start, end)
                    }
                    None => editor,
                }
            }
            RunTarget::Repl | RunTarget::Tests { .. } | RunTarget::NamedTest { .. } => return Ok(None),
        };
        Ok(Some(Arc::new(editor)))
    }

    fn args(&self) -> Result<Vec<String>> {
        match self {
            RunTarget::NamedTest { name, filepath } => {
                let path = resolve_path(filepath)?;
                Ok(vec![name.clone(), path.to_string_lossy().into_owned()])
            }
            _ => Ok(Vec::new()),
        }
    }
}

fn parse_range(lines: &str) -> Result<(usize, usize)> {
    parse_line_range(lines).ok_or_else(|| anyhow!("Invalid line range '{}', expected e.g. 3-7", lines))
}

pub async fn run_command(global: &GlobalArgs, target: RunTarget) -> Result<ExitCode> {
    debug!("running {:?}", target);

    let session = Session::open(global, target.editor()?)?;
    let command_id = target.operation().command_id();
    let Some(dispatch) = session.orchestrator.execute(command_id, &target.args()?) else {
        return Ok(ExitCode::FAILURE);
    };

    if global.dry_run {
        print_command_breakdown(&dispatch.request);
    } else if matches!(target, RunTarget::Repl) {
        // Forward our own input to the REPL until EOF
        let terminal = session
            .cli_host
            .terminals
            .terminal(&dispatch.terminal)
            .context("REPL terminal was not created")?;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            terminal.send_text(&line);
        }
    }

    Ok(session.finish(dispatch).await)
}
