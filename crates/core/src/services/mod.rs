//! Service implementations of the host interfaces

pub mod memory;

pub use memory::{
    MemoryDocument, MemoryEditor, MemoryFileSystem, MemoryHost, MemoryState, MemoryWorkspace,
    RecordingNotifier, RecordingTerminal, RecordingTerminalHost, StaticProbe,
};
