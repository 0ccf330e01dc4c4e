//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use jsforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{JsforgeError, JsforgeResult},
};

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
    fn create_dir_all(&self, path: &Path) -> JsforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> JsforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> JsforgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> JsforgeResult<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FileWrite {
                path: from.to_path_buf(),
                reason: format!("Failed to walk directory: {}", e),
            })?;

            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| ApplicationError::FileWrite {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else {
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
                trace!(file = %relative.display(), "copied");
                copied += 1;
            }
        }

        Ok(copied)
    }

    fn remove_dir_all(&self, path: &Path) -> JsforgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> JsforgeError {
    ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copy_dir_all_merges_into_existing_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("bundle");
        let dst = temp.path().join("project");

        std::fs::create_dir_all(src.join("src/scss")).unwrap();
        std::fs::write(src.join("gulpfile.js"), "proxy").unwrap();
        std::fs::write(src.join("src/scss/project.scss"), "[_INCLUDES_]").unwrap();
        std::fs::create_dir_all(dst.join("src/js")).unwrap();

        let fs = LocalFilesystem::new();
        let copied = fs.copy_dir_all(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs.read_to_string(&dst.join("gulpfile.js")).unwrap(), "proxy");
        assert!(dst.join("src/js").is_dir());
        assert!(dst.join("src/scss/project.scss").is_file());
    }

    #[test]
    fn copy_dir_all_preserves_bytes() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("bundle");
        let dst = temp.path().join("out");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dst).unwrap();
        let bytes = [0u8, 159, 146, 150, b'\n'];
        std::fs::write(src.join("logo.bin"), bytes).unwrap();

        LocalFilesystem.copy_dir_all(&src, &dst).unwrap();

        assert_eq!(std::fs::read(dst.join("logo.bin")).unwrap(), bytes);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem
            .read_to_string(&temp.path().join("nope.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("read file"));
    }
}
