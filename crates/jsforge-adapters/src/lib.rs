//! Infrastructure adapters for jsforge.
//!
//! This crate implements the ports defined in `jsforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::JsonTemplateLoader;
