// ============================================================================
// domain/error.rs - DESCRIPTOR ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for reporting after the run is torn down)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDescriptor(msg) => vec![
                "Check the template file".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("projectName '{}' {}", name, reason),
                "projectName becomes a directory name; use letters, digits, '-' or '_'".into(),
                "Example: \"projectName\": \"my-app\"".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add \"{}\" to the template file", field),
            ],
        }
    }
}
