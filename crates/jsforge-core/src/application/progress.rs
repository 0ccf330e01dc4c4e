//! Progress events emitted while a project is generated.

use std::path::PathBuf;

use crate::application::ports::ProgressReporter;

/// Something the scaffolder just finished doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    ProjectDirectoryCreated { path: PathBuf },
    AssetsCopied { count: usize },
    GroupCreated { group: String },
    ClassCreated { import_path: String },
    EntryFileWritten { path: PathBuf },
    StyleIncludeCreated { include: String },
    StyleImportsAdded { count: usize },
}

/// Reporter that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: &ScaffoldEvent) {}
}
