//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `jsforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::application::progress::ScaffoldEvent;
use crate::domain::ProjectDescriptor;
use crate::error::JsforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `jsforge_adapters::filesystem::LocalFilesystem` (production)
/// - `jsforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> JsforgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> JsforgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> JsforgeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively copy the contents of `from` into `to`, merging with
    /// directories that already exist. Returns the number of files copied.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> JsforgeResult<usize>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> JsforgeResult<()>;
}

/// Port for locating and parsing project templates by name.
///
/// Implemented by:
/// - `jsforge_adapters::template_loader::JsonTemplateLoader`
pub trait TemplateLoader: Send + Sync {
    /// Where the template called `name` lives.
    fn template_path(&self, name: &str) -> PathBuf;

    /// Whether the template exists. Idempotent, no side effects.
    fn exists(&self, name: &str) -> bool;

    /// Read and parse the template. Callers check [`Self::exists`] first.
    fn load(&self, name: &str) -> JsforgeResult<ProjectDescriptor>;
}

/// Observer for scaffold progress.
///
/// Implemented by:
/// - [`crate::application::progress::NoopReporter`]
/// - the CLI's console reporter
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    fn report(&self, event: &ScaffoldEvent);
}
