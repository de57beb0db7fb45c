//! In-memory host
//!
//! Implements every host interface without touching the OS. Useful for
//! embedding the engine where no real terminal exists, and for tests.

use crate::{
    config::Config,
    error::Result,
    interfaces::{
        CommandProbe, Document, Editor, FileSystem, GlobalState, Host, Notifier, Terminal,
        TerminalHost, Workspace,
    },
    types::{LANGUAGE_ID, SourcePosition},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Lock a mutex, recovering the data if a panicking thread poisoned it
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct MemoryDocument {
    file_name: PathBuf,
    language_id: String,
    text: String,
    saves: Mutex<usize>,
}

impl MemoryDocument {
    pub fn new(file_name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self::with_language(file_name, LANGUAGE_ID, text)
    }

    pub fn with_language(
        file_name: impl Into<PathBuf>,
        language_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            language_id: language_id.into(),
            text: text.into(),
            saves: Mutex::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *lock(&self.saves)
    }
}

impl Document for MemoryDocument {
    fn file_name(&self) -> &Path {
        &self.file_name
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.text.split('\n').nth(line).map(str::to_string)
    }

    fn save(&self) -> Result<()> {
        *lock(&self.saves) += 1;
        Ok(())
    }
}

pub struct MemoryEditor {
    document: MemoryDocument,
    cursor: SourcePosition,
    selection: String,
}

impl MemoryEditor {
    pub fn new(document: MemoryDocument) -> Self {
        Self {
            document,
            cursor: SourcePosition::default(),
            selection: String::new(),
        }
    }

    pub fn with_cursor(mut self, line: u32, column: u32) -> Self {
        self.cursor = SourcePosition::new(line, column);
        self
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    pub fn memory_document(&self) -> &MemoryDocument {
        &self.document
    }
}

impl Editor for MemoryEditor {
    fn document(&self) -> &dyn Document {
        &self.document
    }

    fn cursor(&self) -> SourcePosition {
        self.cursor
    }

    fn selected_text(&self) -> String {
        self.selection.clone()
    }
}

#[derive(Default)]
pub struct MemoryWorkspace {
    root: Option<PathBuf>,
    config: Mutex<Config>,
    editor: Mutex<Option<Arc<dyn Editor>>>,
}

impl MemoryWorkspace {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn set_config(&self, config: Config) {
        *lock(&self.config) = config;
    }

    pub fn open(&self, editor: Arc<dyn Editor>) {
        *lock(&self.editor) = Some(editor);
    }
}

impl Workspace for MemoryWorkspace {
    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn config(&self) -> Config {
        lock(&self.config).clone()
    }

    fn active_editor(&self) -> Option<Arc<dyn Editor>> {
        lock(&self.editor).clone()
    }
}

pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    temp_dir: PathBuf,
    writes: Mutex<usize>,
}

impl MemoryFileSystem {
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            files: Mutex::new(BTreeMap::new()),
            temp_dir: temp_dir.into(),
            writes: Mutex::new(0),
        }
    }

    /// Seed a file, for example a prebuilt executable
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        lock(&self.files).insert(path.into(), contents.into());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        lock(&self.files).get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        lock(&self.files).keys().cloned().collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        lock(&self.files).contains_key(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        *lock(&self.writes) += 1;
        lock(&self.files).insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        lock(&self.files).remove(path);
        Ok(())
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone()
    }
}

/// Terminal that records everything sent to it
pub struct RecordingTerminal {
    name: String,
    lines: Mutex<Vec<String>>,
    shown: Mutex<bool>,
}

impl RecordingTerminal {
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    pub fn was_shown(&self) -> bool {
        *lock(&self.shown)
    }
}

impl Terminal for RecordingTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&self) {
        *lock(&self.shown) = true;
    }

    fn send_text(&self, text: &str) {
        lock(&self.lines).push(text.to_string());
    }
}

#[derive(Default)]
pub struct RecordingTerminalHost {
    terminals: Mutex<Vec<Arc<RecordingTerminal>>>,
}

impl RecordingTerminalHost {
    pub fn terminals(&self) -> Vec<Arc<RecordingTerminal>> {
        lock(&self.terminals).clone()
    }

    /// Most recently created terminal with `name`
    pub fn terminal(&self, name: &str) -> Option<Arc<RecordingTerminal>> {
        lock(&self.terminals)
            .iter()
            .rev()
            .find(|terminal| terminal.name == name)
            .cloned()
    }
}

impl TerminalHost for RecordingTerminalHost {
    fn create_terminal(&self, name: &str) -> Arc<dyn Terminal> {
        let terminal = Arc::new(RecordingTerminal {
            name: name.to_string(),
            lines: Mutex::new(Vec::new()),
            shown: Mutex::new(false),
        });
        lock(&self.terminals).push(terminal.clone());
        terminal
    }

    fn find_terminal(&self, name: &str) -> Option<Arc<dyn Terminal>> {
        self.terminal(name).map(|terminal| terminal as Arc<dyn Terminal>)
    }
}

/// Probe with a fixed answer that remembers what it was asked
pub struct StaticProbe {
    available: bool,
    calls: Mutex<Vec<String>>,
}

impl StaticProbe {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl CommandProbe for StaticProbe {
    async fn probe(&self, program: &str, args: &[String]) -> bool {
        let mut call = program.to_string();
        for arg in args {
            call.push(' ');
            call.push_str(arg);
        }
        lock(&self.calls).push(call);
        self.available
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    pub fn infos(&self) -> Vec<String> {
        lock(&self.infos).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        lock(&self.errors).push(message.to_string());
    }

    fn show_info(&self, message: &str) {
        lock(&self.infos).push(message.to_string());
    }
}

#[derive(Default)]
pub struct MemoryState {
    flags: Mutex<HashMap<String, bool>>,
}

impl GlobalState for MemoryState {
    fn get_flag(&self, key: &str) -> Option<bool> {
        lock(&self.flags).get(key).copied()
    }

    fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        lock(&self.flags).insert(key.to_string(), value);
        Ok(())
    }
}

/// A complete in-memory host with handles to every recording part
pub struct MemoryHost {
    pub workspace: Arc<MemoryWorkspace>,
    pub fs: Arc<MemoryFileSystem>,
    pub terminals: Arc<RecordingTerminalHost>,
    pub probe: Arc<StaticProbe>,
    pub notifier: Arc<RecordingNotifier>,
    pub state: Arc<MemoryState>,
}

impl MemoryHost {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            workspace: Arc::new(MemoryWorkspace::new(root)),
            fs: Arc::new(MemoryFileSystem::new("/tmp")),
            terminals: Arc::new(RecordingTerminalHost::default()),
            probe: Arc::new(StaticProbe::new(true)),
            notifier: Arc::new(RecordingNotifier::default()),
            state: Arc::new(MemoryState::default()),
        }
    }

    pub fn with_probe(mut self, available: bool) -> Self {
        self.probe = Arc::new(StaticProbe::new(available));
        self
    }

    pub fn host(&self) -> Host {
        Host {
            workspace: self.workspace.clone(),
            fs: self.fs.clone(),
            terminals: self.terminals.clone(),
            probe: self.probe.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
        }
    }
}
