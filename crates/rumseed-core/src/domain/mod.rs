//! Core domain layer for rumseed.
//!
//! This module contains the pure description of a scaffolded project: its
//! name, its on-disk layout, the default configuration and the README. All
//! I/O (filesystem, wall clock) is reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem or clock reads
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Layout paths and rendering live in entities
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    default_config::{CATEGORY, CONFIG_VERSION, CREATED_FORMAT, SKILL},
    DefaultConfig, FileKind, PlanEntry, PlannedFile, ProjectLayout, ReadmeDocument, ScaffoldPlan,
    ScaffoldStep, Settings, Subdirectory,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::ProjectName;
