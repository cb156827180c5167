//! Project initialization: the one thing `setup-rum` does.
//!
//! Responsibility: translate CLI arguments into core calls, load the extra
//! configuration, and display results. No business logic lives here.
//!
//! Sequence: scaffold → (optional) load extra config → report. Nothing is
//! rolled back on failure.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use rumseed_adapters::{LocalFilesystem, SystemClock};
use rumseed_core::{
    application::ScaffoldService,
    domain::{PlanEntry, ProjectName, ScaffoldPlan},
};

use crate::{
    cli::InitArgs,
    config::ExtraConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute project initialization against the real filesystem and clock.
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(SystemClock::new()));
    initialize(&service, &args, &output)?;
    Ok(())
}

/// Run initialization with an already-wired service.
///
/// Returns the project root, or `None` for a dry run.
pub fn initialize(
    service: &ScaffoldService,
    args: &InitArgs,
    output: &OutputManager,
) -> CliResult<Option<PathBuf>> {
    // 1. Validate the name before anything touches the disk
    let name = ProjectName::new(args.project.as_str()).map_err(|e| CliError::Core(e.into()))?;

    // 2. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&name, &args.output).with_cli_context(|| "planning")?;
        show_plan(&plan, output)?;
        load_extra_config(args, output)?;
        return Ok(None);
    }

    // 3. Scaffold
    output.header(&format!("\u{1f680} Initializing {name}..."))?;
    let project_path = service
        .create_project_structure(&name, &args.output, output)
        .with_cli_context(|| "scaffolding")?;

    // 4. Extra configuration (acknowledged only)
    load_extra_config(args, output)?;

    // 5. Report
    info!(path = %project_path.display(), "Project initialized");
    output.print("")?;
    output.print(&completion_message(&project_path))?;

    Ok(Some(project_path))
}

fn load_extra_config(args: &InitArgs, output: &OutputManager) -> CliResult<()> {
    let Some(path) = &args.config else {
        return Ok(());
    };

    if let Some(extra) = ExtraConfig::load(path)? {
        output.success(&format!(
            "Loaded configuration from {}",
            extra.path().display()
        ))?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn completion_message(project_path: &Path) -> String {
    format!(
        "\u{2705} Project initialized successfully at {}",
        project_path.display()
    )
}

fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would initialize '{}' at {}",
        plan.config().project,
        plan.root().display(),
    ))?;
    for entry in plan.entries() {
        match entry {
            PlanEntry::Directory(path) => out.print(&format!("  dir   {}", path.display()))?,
            PlanEntry::File(file) => out.print(&format!(
                "  file  {} ({} bytes)",
                file.path.display(),
                file.size()
            ))?,
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rumseed_adapters::{FixedClock, MemoryFilesystem};
    use rumseed_core::application::Filesystem;

    use super::*;

    fn args(project: &str) -> InitArgs {
        InitArgs {
            project: project.into(),
            output: PathBuf::from("/work"),
            config: None,
            dry_run: false,
        }
    }

    fn service(fs: &MemoryFilesystem) -> ScaffoldService {
        let instant = NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        ScaffoldService::new(Box::new(fs.clone()), Box::new(FixedClock::new(instant)))
    }

    fn quiet() -> OutputManager {
        OutputManager::with_settings(true, true)
    }

    #[test]
    fn initializes_project_under_output() {
        let fs = MemoryFilesystem::new();
        let root = initialize(&service(&fs), &args("demo"), &quiet())
            .unwrap()
            .unwrap();

        assert_eq!(root, PathBuf::from("/work/demo"));
        assert!(fs.exists(Path::new("/work/demo/logs")));
        let settings = fs
            .read_file(Path::new("/work/demo/config/settings.json"))
            .unwrap();
        assert!(settings.contains("\"created\": \"2026-05-01 10:00:00\""));
    }

    #[test]
    fn empty_name_fails_before_any_write() {
        let fs = MemoryFilesystem::new();
        let err = initialize(&service(&fs), &args(""), &quiet()).unwrap_err();

        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(fs.list_directories().is_empty());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let fs = MemoryFilesystem::new();
        let mut args = args("demo");
        args.dry_run = true;

        let result = initialize(&service(&fs), &args, &quiet()).unwrap();
        assert!(result.is_none());
        assert!(fs.list_directories().is_empty());
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn missing_extra_config_is_ignored() {
        let fs = MemoryFilesystem::new();
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args("demo");
        args.config = Some(tmp.path().join("absent.json"));

        assert!(initialize(&service(&fs), &args, &quiet()).is_ok());
    }

    #[test]
    fn malformed_extra_config_fails_after_scaffold() {
        let fs = MemoryFilesystem::new();
        let tmp = tempfile::tempdir().unwrap();
        let bad = tmp.path().join("bad.json");
        std::fs::write(&bad, "{\"sample_rate\": ").unwrap();

        let mut args = args("demo");
        args.config = Some(bad);

        let err = initialize(&service(&fs), &args, &quiet()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        // Partial state is kept.
        assert!(fs.exists(Path::new("/work/demo/README.md")));
    }

    #[test]
    fn completion_line_names_project_path() {
        assert_eq!(
            completion_message(Path::new("./demo")),
            "\u{2705} Project initialized successfully at ./demo"
        );
    }
}
