use std::path::{Path, PathBuf};

use super::{default_config::DefaultConfig, project_layout::ProjectLayout, readme::ReadmeDocument};
use crate::domain::error::DomainError;

/// Fully resolved scaffold, ready for materialization.
///
/// This is the output of planning. It contains no I/O, only data: the
/// directories to ensure and the files to (over)write, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    layout: ProjectLayout,
    config: DefaultConfig,
    entries: Vec<PlanEntry>,
}

impl ScaffoldPlan {
    /// Build the plan: directories first, then settings.json, then README.md.
    pub fn new(
        layout: ProjectLayout,
        config: DefaultConfig,
        readme: ReadmeDocument,
    ) -> Result<Self, DomainError> {
        let mut entries: Vec<PlanEntry> = layout
            .directories()
            .into_iter()
            .map(PlanEntry::Directory)
            .collect();

        entries.push(PlanEntry::File(PlannedFile {
            kind: FileKind::Settings,
            path: layout.settings_file(),
            content: config.to_json_pretty()?,
        }));
        entries.push(PlanEntry::File(PlannedFile {
            kind: FileKind::Readme,
            path: layout.readme_file(),
            content: readme.into_string(),
        }));

        Ok(Self {
            layout,
            config,
            entries,
        })
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn config(&self) -> &DefaultConfig {
        &self.config
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(path) => Some(path.as_path()),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Directory(PathBuf),
    File(PlannedFile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Settings,
    Readme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub kind: FileKind,
    pub path: PathBuf,
    pub content: String,
}

impl PlannedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Progress event emitted after each completed filesystem action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// A directory was created, or `existed` already and was left alone.
    Directory { path: PathBuf, existed: bool },
    Settings { path: PathBuf },
    Readme { path: PathBuf },
}

impl ScaffoldStep {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path, .. } | Self::Settings { path } | Self::Readme { path } => path,
        }
    }
}
