//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use dbsplice_core::{application::Filesystem, error::SpliceResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> SpliceResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> SpliceResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn walk_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let reason = format!("Failed to walk directory: {e}");
                dbsplice_core::application::ApplicationError::FilesystemError { path, reason }
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        trace!(dir = %dir.display(), count = files.len(), "walked directory");
        Ok(files)
    }

    fn list_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries =
            std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "list directory"))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "list directory"))?;
            if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> dbsplice_core::error::SpliceError {
    use dbsplice_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
