//! jsforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the jsforge
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           jsforge-cli (CLI)             │
//! │     (Loads template, reports progress)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, AssetCopier)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateLoader, Reporter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    jsforge-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonTemplateLoader)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Descriptors, Emitters, ImportManifest) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsforge_core::{
//!     application::{NoopReporter, ScaffoldOptions, ScaffoldService},
//!     domain::{ClassDescriptor, ProjectDescriptor, PropertySpec},
//! };
//!
//! // 1. Describe the project
//! let descriptor = ProjectDescriptor::new("Demo").with_class(
//!     "models",
//!     ClassDescriptor::new("User").with_property(PropertySpec::parse("email:string")),
//! );
//!
//! // 2. Use application service (with an injected filesystem adapter)
//! let service = ScaffoldService::new(filesystem);
//! let options = ScaffoldOptions::new("generated", "boilerplate");
//! service.scaffold(&descriptor, &options, &NoopReporter).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        NoopReporter, RollbackPolicy, ScaffoldEvent, ScaffoldOptions, ScaffoldService,
        ScaffoldSummary,
        ports::{Filesystem, ProgressReporter, TemplateLoader},
    };
    pub use crate::domain::{ClassDescriptor, ProjectDescriptor, PropertySpec, PropertyType};
    pub use crate::error::{JsforgeError, JsforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
