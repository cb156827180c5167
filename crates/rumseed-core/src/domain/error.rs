// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI may log and re-wrap them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    // ========================================================================
    // Internal Errors
    // ========================================================================
    #[error("Failed to serialize default configuration: {reason}")]
    Serialization { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Pass a non-empty name with --project <NAME>".into(),
                "Example: setup-rum --project my-site".into(),
            ],
            Self::Serialization { .. } => vec![
                "This appears to be a bug in setup-rum".into(),
                "Please report it together with the command you ran".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName => ErrorCategory::Validation,
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
