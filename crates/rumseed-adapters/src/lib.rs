//! Infrastructure adapters for rumseed.
//!
//! This crate implements the ports defined in `rumseed-core::application::ports`.
//! It contains all filesystem and wall-clock access.

pub mod clock;
pub mod filesystem;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
