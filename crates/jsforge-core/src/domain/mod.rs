// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for jsforge.
//!
//! Pure generation logic: descriptors, default values, placeholder
//! substitution and the emitters that turn descriptors into source text.
//! All I/O goes through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Descriptors are read-only once parsed
//!
// Public API - what the world sees
pub mod emit;
pub mod entities;
pub mod error;
pub mod manifest;
pub mod placeholder;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use emit::{
    ClassEmitter, EmittedClass, EntryEmitter, ProjectContext, StyleIncludeEmitter, StylePartial,
};
pub use entities::{ClassDescriptor, ProjectDescriptor, PropertySpec};
pub use error::DomainError;
pub use manifest::ImportManifest;
pub use placeholder::{Placeholder, substitute};
pub use value_objects::{DefaultValueResolver, PropertyType};

pub use validation::DomainValidator;
