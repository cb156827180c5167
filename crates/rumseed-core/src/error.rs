//! Unified error handling for rumseed core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for rumseed core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RumseedError {
    /// Errors from the domain layer (invalid input, rendering).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl RumseedError {
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
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type RumseedResult<T> = Result<T, RumseedError>;
