//! Filesystem probe and writes used for temp files and executable lookup

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Delete a file; a missing file is not an error
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Directory for scratch files
    fn temp_dir(&self) -> PathBuf;
}
