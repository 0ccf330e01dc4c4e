//! Unified error handling for jsforge core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for jsforge core operations.
#[derive(Debug, Error, Clone)]
pub enum JsforgeError {
    /// The descriptor breaks a domain rule.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading or writing failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl JsforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type JsforgeResult<T> = Result<T, JsforgeError>;
