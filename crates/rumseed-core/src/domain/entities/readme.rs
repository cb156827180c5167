use std::fmt::{self, Write as _};

use super::{default_config::SKILL, project_layout::Subdirectory};
use crate::domain::value_objects::ProjectName;

/// Generated `README.md` for a scaffolded project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeDocument {
    content: String,
}

impl ReadmeDocument {
    pub fn render(project: &ProjectName) -> Self {
        let mut content = String::new();
        // Writing into a String cannot fail.
        let _ = write!(content, "# {project}\n\nInitialized with {SKILL} skill\n\n");
        content.push_str("## Structure\n");
        for sub in Subdirectory::ALL {
            let _ = writeln!(content, "- {}/ - {}", sub.dir_name(), sub.purpose());
        }
        content.push_str("\n## Usage\nSee skill documentation for usage instructions.\n");

        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl fmt::Display for ReadmeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
