//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rumseed-adapters` crate provides implementations.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::ScaffoldStep;
use crate::error::RumseedResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rumseed_adapters::filesystem::LocalFilesystem` (production)
/// - `rumseed_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds when the directory already exists.
    fn create_dir_all(&self, path: &Path) -> RumseedResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> RumseedResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for reading the current local time.
///
/// Implemented by:
/// - `rumseed_adapters::clock::SystemClock` (wall clock)
/// - `rumseed_adapters::clock::FixedClock` (deterministic tests)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Port for progress notifications.
///
/// Called once per completed filesystem action. Any `Fn(&ScaffoldStep)`
/// closure is a reporter.
pub trait ProgressReporter {
    fn report(&self, step: &ScaffoldStep);
}

impl<F> ProgressReporter for F
where
    F: Fn(&ScaffoldStep),
{
    fn report(&self, step: &ScaffoldStep) {
        self(step)
    }
}
