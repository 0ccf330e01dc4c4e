//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `jsforge-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateLoader`: Template lookup and parsing
//!   - `ProgressReporter`: Progress observer

pub mod output;

pub use output::{Filesystem, ProgressReporter, TemplateLoader};

#[cfg(test)]
pub use output::{MockFilesystem, MockProgressReporter};
