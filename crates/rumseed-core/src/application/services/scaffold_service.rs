//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Plan: resolve layout, stamp the default config, render the README
//! 2. Apply: ensure directories, write files, report each step
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//! There is no rollback: a failure part-way leaves what was already written,
//! and re-running is the recovery path.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Clock, Filesystem, ProgressReporter},
    domain::{
        DefaultConfig, FileKind, PlanEntry, ProjectLayout, ProjectName, ReadmeDocument,
        ScaffoldPlan, ScaffoldStep,
    },
    error::RumseedResult,
};

/// Main scaffolding service.
///
/// Holds no state between calls beyond its adapters; every invocation is
/// independent.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rumseed_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, clock: Box<dyn Clock>) -> Self {
        Self { filesystem, clock }
    }

    /// Scaffold a new project under `output_dir` and return its root path.
    ///
    /// Existing directories are reused and existing `settings.json` /
    /// `README.md` files are overwritten.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            output_dir = %output_dir.as_ref().display()
        )
    )]
    pub fn create_project_structure(
        &self,
        project_name: &ProjectName,
        output_dir: impl AsRef<Path>,
        reporter: &dyn ProgressReporter,
    ) -> RumseedResult<PathBuf> {
        info!("Scaffolding project");

        let plan = self.plan(project_name, output_dir)?;
        self.apply(&plan, reporter)?;

        info!(path = %plan.root().display(), "Scaffold completed successfully");
        Ok(plan.root().to_path_buf())
    }

    /// Compute everything a scaffold would write, without touching the
    /// filesystem.
    pub fn plan(
        &self,
        project_name: &ProjectName,
        output_dir: impl AsRef<Path>,
    ) -> RumseedResult<ScaffoldPlan> {
        let layout = ProjectLayout::new(output_dir, project_name);
        let config = DefaultConfig::new(project_name, self.clock.now());
        let readme = ReadmeDocument::render(project_name);

        let plan = ScaffoldPlan::new(layout, config, readme)?;
        debug!(
            root = %plan.root().display(),
            entries = plan.entry_count(),
            created = %plan.config().created,
            "Scaffold planned"
        );
        Ok(plan)
    }

    /// Materialize a plan in order, reporting after every entry.
    pub fn apply(&self, plan: &ScaffoldPlan, reporter: &dyn ProgressReporter) -> RumseedResult<()> {
        for entry in plan.entries() {
            let step = match entry {
                PlanEntry::Directory(path) => {
                    let existed = self.filesystem.exists(path);
                    self.filesystem.create_dir_all(path)?;
                    ScaffoldStep::Directory {
                        path: path.clone(),
                        existed,
                    }
                }
                PlanEntry::File(file) => {
                    self.filesystem.write_file(&file.path, &file.content)?;
                    match file.kind {
                        FileKind::Settings => ScaffoldStep::Settings {
                            path: file.path.clone(),
                        },
                        FileKind::Readme => ScaffoldStep::Readme {
                            path: file.path.clone(),
                        },
                    }
                }
            };

            debug!(path = %step.path().display(), "Step completed");
            reporter.report(&step);
        }

        Ok(())
    }
}
