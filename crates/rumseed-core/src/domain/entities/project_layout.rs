use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ProjectName;

/// One of the fixed subdirectories every project receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subdirectory {
    Config,
    Data,
    Output,
    Logs,
}

impl Subdirectory {
    /// All subdirectories, in creation order.
    pub const ALL: [Subdirectory; 4] = [Self::Config, Self::Data, Self::Output, Self::Logs];

    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Data => "data",
            Self::Output => "output",
            Self::Logs => "logs",
        }
    }

    /// One-line description used in the generated README.
    pub fn purpose(self) -> &'static str {
        match self {
            Self::Config => "Configuration files",
            Self::Data => "Input data",
            Self::Output => "Generated output",
            Self::Logs => "Application logs",
        }
    }
}

impl fmt::Display for Subdirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Where every artifact of a scaffolded project lives on disk.
///
/// `root` is `<output_dir>/<project_name>`; everything else hangs off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub const SETTINGS_FILE: &'static str = "settings.json";
    pub const README_FILE: &'static str = "README.md";

    pub fn new(output_dir: impl AsRef<Path>, project_name: &ProjectName) -> Self {
        Self {
            root: output_dir.as_ref().join(project_name.as_str()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn subdirectory(&self, sub: Subdirectory) -> PathBuf {
        self.root.join(sub.dir_name())
    }

    /// The root followed by the four subdirectories, in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        std::iter::once(self.root.clone())
            .chain(Subdirectory::ALL.iter().map(|sub| self.subdirectory(*sub)))
            .collect()
    }

    pub fn settings_file(&self) -> PathBuf {
        self.subdirectory(Subdirectory::Config)
            .join(Self::SETTINGS_FILE)
    }

    pub fn readme_file(&self) -> PathBuf {
        self.root.join(Self::README_FILE)
    }
}
