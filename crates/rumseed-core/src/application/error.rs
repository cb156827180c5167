//! Application layer errors.
//!
//! These errors represent failures in orchestration (I/O through the ports),
//! not business rules. Business rule errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a scaffold.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state was poisoned by a panicking writer.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that --output points to a directory, not a file".into(),
                "Check available disk space".into(),
                "Re-running is safe: existing directories are reused".into(),
            ],
            Self::LockPoisoned => vec!["This appears to be a bug in setup-rum".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
