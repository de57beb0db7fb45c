//! Configuration management for r2-runner

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_EXECUTABLE, DEFAULT_REPL_EXECUTABLE};
