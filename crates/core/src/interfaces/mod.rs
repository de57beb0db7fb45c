//! Interfaces to the host environment
//!
//! The engine never touches the OS directly for run side effects. Everything
//! it reads or writes goes through these traits, bundled into [`Host`].

use std::sync::Arc;

pub mod document;
pub mod filesystem;
pub mod notifier;
pub mod terminal;
pub mod workspace;

pub use document::{Document, Editor};
pub use filesystem::FileSystem;
pub use notifier::{GlobalState, Notifier};
pub use terminal::{CommandProbe, Terminal, TerminalHost};
pub use workspace::Workspace;

/// Capabilities supplied by the host
#[derive(Clone)]
pub struct Host {
    pub workspace: Arc<dyn Workspace>,
    pub fs: Arc<dyn FileSystem>,
    pub terminals: Arc<dyn TerminalHost>,
    pub probe: Arc<dyn CommandProbe>,
    pub notifier: Arc<dyn Notifier>,
    pub state: Arc<dyn GlobalState>,
}
