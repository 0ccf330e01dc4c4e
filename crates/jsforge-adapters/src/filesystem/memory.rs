//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use jsforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{JsforgeError, JsforgeResult},
};

/// In-memory filesystem for testing.
///
/// Every mutating call through the [`Filesystem`] port is counted, so tests
/// can assert that a run wrote nothing at all.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    mutations: usize,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Place a file (and its parent directories) without counting it as a
    /// mutation. Used to set up fixtures such as the boilerplate bundle.
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Create a directory without counting it as a mutation.
    pub fn seed_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_all(path.as_ref());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Files under `root`, sorted by path.
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.list_files()
            .into_iter()
            .filter(|p| p.starts_with(root))
            .collect()
    }

    /// Number of mutating port calls so far.
    pub fn mutation_count(&self) -> usize {
        self.inner.read().map(|inner| inner.mutations).unwrap_or(0)
    }

    fn write_lock(
        &self,
        path: &Path,
    ) -> JsforgeResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned(path))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> JsforgeResult<()> {
        let mut inner = self.write_lock(path)?;
        inner.mutations += 1;
        inner.add_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> JsforgeResult<()> {
        let mut inner = self.write_lock(path)?;
        inner.mutations += 1;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FileWrite {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> JsforgeResult<String> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> JsforgeResult<usize> {
        let mut inner = self.write_lock(to)?;
        inner.mutations += 1;

        if !inner.directories.contains(from) {
            return Err(ApplicationError::FileWrite {
                path: from.to_path_buf(),
                reason: "Source directory does not exist".into(),
            }
            .into());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, content)| {
                p.strip_prefix(from)
                    .ok()
                    .map(|rel| (to.join(rel), content.clone()))
            })
            .collect();

        for dir in dirs {
            inner.add_dir_all(&dir);
        }
        let copied = files.len();
        inner.files.extend(files);
        Ok(copied)
    }

    fn remove_dir_all(&self, path: &Path) -> JsforgeResult<()> {
        let mut inner = self.write_lock(path)?;
        inner.mutations += 1;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn lock_poisoned(path: &Path) -> JsforgeError {
    ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: "In-memory filesystem lock poisoned".into(),
    }
    .into()
}
