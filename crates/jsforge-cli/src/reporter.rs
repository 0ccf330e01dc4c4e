//! Console rendering of scaffold progress.

use tracing::debug;

use jsforge_core::application::{ProgressReporter, ScaffoldEvent};

use crate::output::OutputManager;

/// Prints one line per [`ScaffoldEvent`].
pub struct ConsoleReporter<'a> {
    output: &'a OutputManager,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }
}

impl ProgressReporter for ConsoleReporter<'_> {
    fn report(&self, event: &ScaffoldEvent) {
        // A closed stdout must not abort generation.
        if let Err(e) = self.output.step(&describe(event)) {
            debug!(error = %e, "Progress line dropped");
        }
    }
}

/// The human-readable line for `event`.
pub fn describe(event: &ScaffoldEvent) -> String {
    match event {
        ScaffoldEvent::ProjectDirectoryCreated { path } => {
            format!("Creating project directory in {}", path.display())
        }
        ScaffoldEvent::AssetsCopied { count } => format!("Copied {count} boilerplate files"),
        ScaffoldEvent::GroupCreated { group } => format!("Creating directory \"{group}\"..."),
        ScaffoldEvent::ClassCreated { import_path } => format!("Creating class \"{import_path}\""),
        ScaffoldEvent::EntryFileWritten { path } => format!("Created {}", path.display()),
        ScaffoldEvent::StyleIncludeCreated { include } => {
            format!("Created sass include \"{include}\"")
        }
        ScaffoldEvent::StyleImportsAdded { .. } => "Added @imports for all includes.".to_owned(),
    }
}
