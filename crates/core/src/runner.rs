//! Main runner that coordinates lookup, resolution and dispatch
//!
//! Every operation follows the same order: check its guards, resolve an
//! executable, build a [`RunRequest`], dispatch it to a terminal, and
//! schedule any deferred work. A guard failure aborts before anything is
//! written or spawned.
//!
//! Operations with deferred work need a Tokio runtime on the calling thread
//! and fail with [`Error::NoRuntime`] before any side effect when there is none.

use crate::{
    command::{
        COVERAGE_ARGS, CommandBuilder, CommandDispatcher, Operation, QUIET_REPL_FLAG, REPL_FLAG,
        RunRequest,
    },
    error::{Error, GuardFailure, Result},
    interfaces::{Editor, Host, Terminal},
    parser::FunctionBoundaryLocator,
    patterns::TestDeclarationScanner,
    registry::CommandRegistry,
    resolver::ExecutableResolver,
    types::{CodeLens, Origin, ResolvedExecutable, SourceSpan, TEST_FILE_SUFFIX, TestDeclaration},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Hint shown when the test runner cannot be started
pub const BUILD_HINT: &str = "go build -o r2test cmd/r2test/main.go";

/// Arguments of the existence probe for a bare test runner command
pub const PROBE_ARGS: [&str; 1] = ["--version"];

/// Delays for the two deferred actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a selection's temp file outlives its dispatch
    pub temp_file_cleanup: Duration,
    /// How long a new REPL gets to start before code is fed into it
    pub repl_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            temp_file_cleanup: Duration::from_millis(5000),
            repl_settle: Duration::from_millis(1000),
        }
    }
}

/// Result of an operation that reached a terminal
#[derive(Debug)]
pub struct Dispatch {
    pub request: RunRequest,
    pub terminal: String,
    /// False when an open REPL was reused and no command line was sent
    pub launched: bool,
    /// Deferred work: temp file cleanup, REPL feeding or the existence probe
    pub deferred: Vec<JoinHandle<()>>,
}

impl Dispatch {
    /// Wait for all deferred work to finish
    pub async fn settle(self) {
        for handle in self.deferred {
            if let Err(e) = handle.await {
                warn!("deferred task failed: {}", e);
            }
        }
    }
}

pub struct Orchestrator {
    host: Host,
    locator: FunctionBoundaryLocator,
    scanner: TestDeclarationScanner,
    resolver: ExecutableResolver,
    dispatcher: CommandDispatcher,
    registry: CommandRegistry,
    timings: Timings,
}

impl Orchestrator {
    pub fn new(host: Host) -> Result<Self> {
        Self::with_timings(host, Timings::default())
    }

    pub fn with_timings(host: Host, timings: Timings) -> Result<Self> {
        Ok(Self {
            locator: FunctionBoundaryLocator::new()?,
            scanner: TestDeclarationScanner::new()?,
            resolver: ExecutableResolver::new(host.fs.clone()),
            dispatcher: CommandDispatcher::new(host.terminals.clone()),
            registry: CommandRegistry::new(),
            host,
            timings,
        })
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Run a registered command by id, reporting any failure to the user.
    ///
    /// Returns `None` when the command was aborted; the reason has already
    /// been shown through the notifier.
    pub fn execute(&self, command_id: &str, args: &[String]) -> Option<Dispatch> {
        match self.registry.invoke(self, command_id, args) {
            Ok(dispatch) => Some(dispatch),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn report(&self, error: &Error) {
        if error.is_guard() {
            debug!("operation aborted: {}", error);
        } else {
            warn!("operation failed: {}", error);
        }
        self.host.notifier.show_error(&error.to_string());
    }

    /// Declarations of a document, honoring the discovery setting
    pub fn test_declarations(&self, file_name: &Path, text: &str) -> Vec<TestDeclaration> {
        let enabled = self.host.workspace.config().enable_test_code_lens;
        self.scanner.scan(&file_name.to_string_lossy(), text, enabled)
    }

    /// Run lenses for a document, honoring the discovery setting
    pub fn code_lenses(&self, file_name: &Path, text: &str) -> Vec<CodeLens> {
        let enabled = self.host.workspace.config().enable_test_code_lens;
        self.scanner.code_lenses(file_name, text, enabled)
    }

    /// Span of the function around `cursor_line`
    pub fn enclosing_function(&self, text: &str, cursor_line: u32) -> Option<SourceSpan> {
        self.locator.locate(text, cursor_line)
    }

    /// Save the active R2Lang document and run it
    pub fn run_file(&self) -> Result<Dispatch> {
        let editor = self
            .host
            .workspace
            .active_editor()
            .ok_or(GuardFailure::NoActiveFile)?;
        let document = editor.document();
        if !document.is_r2lang() {
            return Err(GuardFailure::NotR2LangFile.into());
        }

        document.save()?;

        let root = self.host.workspace.root();
        let executable = self
            .resolver
            .resolve_runner(&self.host.workspace.config(), root.as_deref());
        let request = interpreter_command(Operation::RunFile, executable, root)
            .arg(path_string(document.file_name()))
            .build();

        Ok(self.dispatch(request, Vec::new()))
    }

    /// Write the selection to a temp file, run it, and delete the file later
    pub fn run_selection(&self) -> Result<Dispatch> {
        let editor = self
            .host
            .workspace
            .active_editor()
            .ok_or(GuardFailure::NoActiveEditor)?;
        let selected = editor.selected_text();
        if selected.trim().is_empty() {
            return Err(GuardFailure::EmptySelection.into());
        }
        let runtime = runtime()?;

        let temp_path = self.host.fs.temp_dir().join(format!(
            "r2_selection_{}.r2",
            uuid::Uuid::new_v4().simple()
        ));
        self.host.fs.write_text(&temp_path, &selected)?;
        debug!("wrote selection to {}", temp_path.display());

        let root = self.host.workspace.root();
        let executable = self
            .resolver
            .resolve_runner(&self.host.workspace.config(), root.as_deref());
        let request = interpreter_command(Operation::RunSelection, executable, root)
            .arg(path_string(&temp_path))
            .build();

        let mut dispatch = self.dispatch(request, Vec::new());
        dispatch
            .deferred
            .push(self.schedule_cleanup(&runtime, temp_path));
        Ok(dispatch)
    }

    pub fn open_repl(&self) -> Result<Dispatch> {
        let request = self.repl_request(Operation::OpenRepl, &[REPL_FLAG]);
        Ok(self.dispatch(request, Vec::new()))
    }

    pub fn run_all_tests(&self) -> Result<Dispatch> {
        let request = CommandBuilder::new(Operation::RunAllTests, self.test_runner()).build();
        Ok(self.dispatch(request, Vec::new()))
    }

    /// Save the active test file and run the tests in its directory
    pub fn run_current_test_file(&self) -> Result<Dispatch> {
        let editor = self
            .host
            .workspace
            .active_editor()
            .ok_or(GuardFailure::NoActiveTestFile)?;
        let document = editor.document();
        if !document.is_r2lang() {
            return Err(GuardFailure::NotR2LangFile.into());
        }
        if !document.is_test_file() {
            return Err(GuardFailure::NotTestFile {
                suffix: TEST_FILE_SUFFIX,
            }
            .into());
        }

        document.save()?;

        let request = CommandBuilder::new(Operation::RunCurrentTestFile, self.test_runner())
            .arg(owning_directory(document.file_name()))
            .build();
        Ok(self.dispatch(request, Vec::new()))
    }

    pub fn run_with_coverage(&self) -> Result<Dispatch> {
        let request = CommandBuilder::new(Operation::RunWithCoverage, self.test_runner())
            .args(COVERAGE_ARGS)
            .build();
        Ok(self.dispatch(request, Vec::new()))
    }

    /// Run one suite or case by name from the file that declares it.
    ///
    /// A bare test runner command is probed with `--version` in the
    /// background; the run is dispatched either way and a failed probe
    /// surfaces its own message pointing at the build step.
    pub fn run_named_test(&self, name: &str, file_path: &Path) -> Result<Dispatch> {
        if name.trim().is_empty() || file_path.as_os_str().is_empty() {
            return Err(GuardFailure::NoTestSelected.into());
        }

        let request = self.named_test_request(name, file_path);
        let mut deferred = Vec::new();
        if request.executable.is_bare_command() {
            let runtime = runtime()?;
            deferred.push(self.schedule_probe(&runtime, request.executable.clone()));
        }

        let dispatch = self.dispatch(request, deferred);
        self.host
            .notifier
            .show_info(&format!("Running test: {name}"));
        Ok(dispatch)
    }

    /// The request a named test run would dispatch, without running it
    pub fn named_test_request(&self, name: &str, file_path: &Path) -> RunRequest {
        CommandBuilder::new(Operation::RunNamedTest, self.test_runner())
            .with_test_filter(name)
            .arg(owning_directory(file_path))
            .build()
    }

    /// Send the selection, current line or enclosing function to a REPL.
    ///
    /// An open REPL terminal is reused; otherwise a new one is started. Lines
    /// are sent one by one after the settle delay, blank lines dropped.
    pub fn feed_repl(&self) -> Result<Dispatch> {
        let editor = self
            .host
            .workspace
            .active_editor()
            .ok_or(GuardFailure::NoActiveEditor)?;

        let code = self.code_for_repl(editor.as_ref());
        if code.trim().is_empty() {
            return Err(GuardFailure::NothingToRun.into());
        }
        let runtime = runtime()?;

        let request = self.repl_request(Operation::FeedRepl, &[REPL_FLAG, QUIET_REPL_FLAG]);
        let (terminal, launched) = match self.dispatcher.existing(&request.terminal_name()) {
            Some(terminal) => {
                debug!("reusing REPL terminal '{}'", terminal.name());
                terminal.show();
                (terminal, false)
            }
            None => (self.dispatcher.dispatch(&request), true),
        };

        let feed = self.schedule_feed(&runtime, terminal.clone(), code);
        Ok(Dispatch {
            request,
            terminal: terminal.name().to_string(),
            launched,
            deferred: vec![feed],
        })
    }

    fn code_for_repl(&self, editor: &dyn Editor) -> String {
        if editor.has_selection() {
            return editor.selected_text();
        }

        let line = editor.current_line();
        if !line.trim().is_empty() {
            return line;
        }

        let text = editor.document().text();
        self.locator
            .enclosing_function(&text, editor.cursor().line)
            .map(|(_, function)| function)
            .unwrap_or_default()
    }

    fn test_runner(&self) -> ResolvedExecutable {
        let root = self.host.workspace.root();
        self.resolver
            .resolve_test_runner(&self.host.workspace.config(), root.as_deref())
    }

    /// REPL request; `checkout_flags` only apply to `go run main.go`
    fn repl_request(&self, operation: Operation, checkout_flags: &[&str]) -> RunRequest {
        let root = self.host.workspace.root();
        let executable = self
            .resolver
            .resolve_repl(&self.host.workspace.config(), root.as_deref());
        let builder = if executable.origin == Origin::SourceCheckout {
            interpreter_command(operation, executable, root).args(checkout_flags.iter().copied())
        } else {
            interpreter_command(operation, executable, root)
        };
        builder.build()
    }

    fn dispatch(&self, request: RunRequest, deferred: Vec<JoinHandle<()>>) -> Dispatch {
        let terminal = self.dispatcher.dispatch(&request);
        Dispatch {
            terminal: terminal.name().to_string(),
            request,
            launched: true,
            deferred,
        }
    }

    fn schedule_cleanup(&self, runtime: &Handle, path: PathBuf) -> JoinHandle<()> {
        let fs = self.host.fs.clone();
        let delay = self.timings.temp_file_cleanup;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Best effort, the file is inert once the run has started
            if let Err(e) = fs.remove(&path) {
                debug!("ignoring cleanup failure for {}: {}", path.display(), e);
            }
        })
    }

    fn schedule_feed(
        &self,
        runtime: &Handle,
        terminal: Arc<dyn Terminal>,
        code: String,
    ) -> JoinHandle<()> {
        let delay = self.timings.repl_settle;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            for line in code.split('\n') {
                let line = line.trim_end_matches('\r');
                if !line.trim().is_empty() {
                    terminal.send_text(line);
                }
            }
        })
    }

    fn schedule_probe(&self, runtime: &Handle, executable: ResolvedExecutable) -> JoinHandle<()> {
        let probe = self.host.probe.clone();
        let notifier = self.host.notifier.clone();
        runtime.spawn(async move {
            let args: Vec<String> = PROBE_ARGS.iter().map(|arg| arg.to_string()).collect();
            if !probe.probe(&executable.path, &args).await {
                let error = Error::ExecutableNotFound {
                    executable: executable.path.clone(),
                    build_hint: BUILD_HINT,
                };
                info!("test runner probe failed for {}", executable.path);
                notifier.show_error(&error.to_string());
            }
        })
    }
}

/// Handle for deferred work; checked before anything is written or dispatched
fn runtime() -> Result<Handle> {
    Handle::try_current().map_err(|_| Error::NoRuntime)
}

/// Builder for the runner or REPL, running from the checkout root when needed
fn interpreter_command(
    operation: Operation,
    executable: ResolvedExecutable,
    root: Option<PathBuf>,
) -> CommandBuilder {
    let source_checkout = executable.origin == Origin::SourceCheckout;
    let builder = CommandBuilder::new(operation, executable);
    match root {
        Some(root) if source_checkout => builder.with_cwd(root),
        _ => builder,
    }
}

/// Directory holding `file`, `.` for a bare file name
fn owning_directory(file: &Path) -> String {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path_string(parent),
        _ => ".".to_string(),
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
