//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not descriptor
//! rules. Descriptor errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a template or writing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The named template file does not exist.
    #[error("Template '{name}' does not exist (looked in {path})")]
    TemplateNotFound { name: String, path: PathBuf },

    /// The template file is not well-formed structured data.
    #[error("Malformed data in template {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project directory already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Copying the static asset bundle failed.
    #[error("Failed to copy assets from {path}: {reason}")]
    AssetCopy { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, path } => vec![
                format!("No template file named '{}.json'", name),
                format!("Templates are read from {}", path.display()),
                "Pass the template name without the .json extension".into(),
            ],
            Self::TemplateParse { path, .. } => vec![
                format!("Fix the JSON in {}", path.display()),
                "Validate it with a JSON linter".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different projectName".into(),
                "Or move the existing project out of the way".into(),
            ],
            Self::AssetCopy { path, .. } => vec![
                format!("Check the boilerplate bundle at {}", path.display()),
                "It must contain gulpfile.js and src/scss/project.scss".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateParse { .. } | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::AssetCopy { .. } | Self::FileWrite { .. } => ErrorCategory::Internal,
        }
    }
}
