//! The tool's self-generated `settings.json` record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ProjectName};

/// Literal written to `version`.
pub const CONFIG_VERSION: &str = "1.0.0";
/// Literal written to `skill`.
pub const SKILL: &str = "real-user-monitoring";
/// Literal written to `category`.
pub const CATEGORY: &str = "performance";
/// `strftime` pattern of the `created` field.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default project configuration.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConfig {
    pub project: String,
    pub version: String,
    pub skill: String,
    pub category: String,
    pub created: String,
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub verbose: bool,
    pub max_workers: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: true,
            max_workers: 4,
        }
    }
}

impl DefaultConfig {
    pub fn new(project: &ProjectName, created: NaiveDateTime) -> Self {
        Self {
            project: project.as_str().to_owned(),
            version: CONFIG_VERSION.into(),
            skill: SKILL.into(),
            category: CATEGORY.into(),
            created: created.format(CREATED_FORMAT).to_string(),
            settings: Settings::default(),
        }
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Serialization {
            reason: e.to_string(),
        })
    }
}
