//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use rumseed_core::{
    application::{ApplicationError, ports::Filesystem},
    error::RumseedResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// the service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories (including implied ancestors), sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Refuse any directory creation or write at or below `path`.
    pub fn deny_writes_under(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.read_only.clear();
        }
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> RumseedResult<()> {
        if self.read_only.iter().any(|denied| path.starts_with(denied)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> RumseedResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.check_writable(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: format!("'{}' is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RumseedResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.check_writable(path)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
