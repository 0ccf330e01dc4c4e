//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project from a descriptor".

pub mod asset_copier;
pub mod scaffold_service;

pub use asset_copier::AssetCopier;
pub use scaffold_service::{RollbackPolicy, ScaffoldOptions, ScaffoldService, ScaffoldSummary};
