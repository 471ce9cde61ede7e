//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use dbsplice_core::{
    application::{ApplicationError, Filesystem},
    error::SpliceResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored file paths (testing helper).
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut paths: Vec<_> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_error() -> dbsplice_core::error::SpliceError {
        dbsplice_core::error::SpliceError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> SpliceResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        // Mirror the real filesystem: the parent must already exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SpliceResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn walk_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        let mut files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }

    fn list_files(&self, dir: &Path) -> SpliceResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        let mut files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }
}
