use std::io;

/// Precondition failures reported to the user before anything is dispatched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardFailure {
    #[error("No active R2Lang file found")]
    NoActiveFile,

    #[error("No active editor found")]
    NoActiveEditor,

    #[error("No active R2Lang test file found")]
    NoActiveTestFile,

    #[error("Current file is not a R2Lang file")]
    NotR2LangFile,

    #[error("Current file is not a R2Lang test file (must end with {suffix})")]
    NotTestFile { suffix: &'static str },

    #[error("No text selected")]
    EmptySelection,

    #[error("No code to run. Select code or position cursor on a function.")]
    NothingToRun,

    #[error("No test selected to run")]
    NoTestSelected,
}

/// Errors that can occur during r2-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Guard(#[from] GuardFailure),

    #[error("R2Test executable not found. Please build it first: {build_hint}")]
    ExecutableNotFound {
        executable: String,
        build_hint: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {command}: expected {expected}, got {actual}")]
    InvalidArguments {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No async runtime available to schedule deferred work")]
    NoRuntime,
}

impl Error {
    /// Whether this error is a plain precondition failure
    pub fn is_guard(&self) -> bool {
        matches!(self, Error::Guard(_))
    }
}

/// Result type alias for r2-runner operations
pub type Result<T> = std::result::Result<T, Error>;
