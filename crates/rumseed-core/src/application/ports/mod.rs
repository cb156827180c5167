//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rumseed-adapters` (and the
//! CLI, for progress output) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `Clock`: Current local time for the `created` stamp
//!   - `ProgressReporter`: Per-step progress notifications

pub mod output;

pub use output::{Clock, Filesystem, ProgressReporter};

#[cfg(test)]
pub use output::{MockClock, MockFilesystem};
