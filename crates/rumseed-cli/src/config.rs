//! Extra configuration supplied with `--config`.
//!
//! The file is loaded once and acknowledged; its values are never merged
//! into the generated `settings.json` and nothing is written back.
//!
//! # Resolution
//!
//! 1. Path absent → skipped, not an error
//! 2. Path present but unreadable → [`CliError::IoError`]
//! 3. Path present, not JSON → [`CliError::ConfigError`]

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{CliError, CliResult, IntoCli};

/// A loaded extra-configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraConfig {
    path: PathBuf,
    document: Value,
}

impl ExtraConfig {
    /// Load `path` if it exists.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> CliResult<Option<Self>> {
        if !path.exists() {
            debug!("Extra configuration not found, skipping");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;

        let document: Value = serde_json::from_str(&raw).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: format!("'{}' is not valid JSON: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let config = Self {
            path: path.to_path_buf(),
            document,
        };
        debug!(keys = config.top_level_keys(), "Extra configuration loaded");
        Ok(Some(config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Number of keys when the document is an object, otherwise zero.
    pub fn top_level_keys(&self) -> usize {
        self.document().as_object().map_or(0, |obj| obj.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = ExtraConfig::load(&tmp.path().join("nope.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn valid_json_is_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("extra.json");
        std::fs::write(&path, r#"{"sample_rate": 0.5, "endpoint": "https://rum.test"}"#).unwrap();

        let loaded = ExtraConfig::load(&path).unwrap().unwrap();
        assert_eq!(loaded.path(), path);
        assert_eq!(loaded.top_level_keys(), 2);
        assert_eq!(loaded.document()["sample_rate"], 0.5);
    }

    #[test]
    fn non_object_json_is_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let loaded = ExtraConfig::load(&path).unwrap().unwrap();
        assert_eq!(loaded.top_level_keys(), 0);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ExtraConfig::load(&path).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn empty_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.json");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            ExtraConfig::load(&path),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn directory_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ExtraConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
    }
}
