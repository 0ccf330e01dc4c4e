//! Application layer for jsforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, AssetCopier)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Progress**: Events reported while a project is generated
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain emitters and owns all I/O
//! through ports. Rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod progress;
pub mod services;

// Re-export main services
pub use services::{
    AssetCopier, RollbackPolicy, ScaffoldOptions, ScaffoldService, ScaffoldSummary,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressReporter, TemplateLoader};

pub use error::ApplicationError;
pub use progress::{NoopReporter, ScaffoldEvent};
