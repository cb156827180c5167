pub mod default_config;
pub mod project_layout;
pub mod readme;
pub mod scaffold_plan;

pub use default_config::{DefaultConfig, Settings};
pub use project_layout::{ProjectLayout, Subdirectory};
pub use readme::ReadmeDocument;
pub use scaffold_plan::{FileKind, PlanEntry, PlannedFile, ScaffoldPlan, ScaffoldStep};
