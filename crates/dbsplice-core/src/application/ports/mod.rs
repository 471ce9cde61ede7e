//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `dbsplice-adapters` implement
//! these.

use std::path::{Path, PathBuf};

use crate::error::SpliceResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dbsplice_adapters::filesystem::LocalFilesystem` (production)
/// - `dbsplice_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> SpliceResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpliceResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// All files underneath a directory, recursively, in stable order.
    /// A missing directory yields an empty list, not an error.
    fn walk_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>>;

    /// Direct file children of a directory, in stable order.
    /// A missing directory yields an empty list, not an error.
    fn list_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>>;
}
