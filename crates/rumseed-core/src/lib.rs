//! rumseed Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `setup-rum`
//! project initializer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          rumseed-cli (setup-rum)        │
//! │   (Drives the service, reports steps)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Filesystem, Clock, ProgressReporter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rumseed-adapters (Infrastructure)    │
//! │  (LocalFilesystem, SystemClock, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectLayout, DefaultConfig, README)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rumseed_core::prelude::*;
//!
//! let name = ProjectName::new("checkout-web").unwrap();
//! let service = ScaffoldService::new(filesystem, clock);
//! let root = service
//!     .create_project_structure(&name, "./sites", &|step: &ScaffoldStep| {
//!         println!("{}", step.path().display())
//!     })
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Clock, Filesystem, ProgressReporter},
    };
    pub use crate::domain::{
        DefaultConfig, ProjectLayout, ProjectName, ReadmeDocument, ScaffoldPlan, ScaffoldStep,
        Settings, Subdirectory,
    };
    pub use crate::error::{RumseedError, RumseedResult};
}
