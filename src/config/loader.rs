//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::StartcheckConfig;
use crate::error::{Result, StartcheckError};

/// Location of the project config: `.startcheck/config.yml`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(".startcheck").join("config.yml")
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StartcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StartcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StartcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<StartcheckConfig> {
    if content.trim().is_empty() {
        return Ok(StartcheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StartcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An override must exist. Without one, `.startcheck/config.yml` under
/// `root` is used if present, else the defaults.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<StartcheckConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = config_path(root);
    match load_config_file(&path) {
        Err(StartcheckError::ConfigNotFound { .. }) => {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(StartcheckConfig::default())
        }
        other => other,
    }
}
