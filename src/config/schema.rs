//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::DEFAULT_REPORT_FILE;
use crate::state::DEFAULT_DATA_FILE;

/// Contents of `.startcheck/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartcheckConfig {
    /// Where checklist data is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Where `report --output` writes when no path is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,

    /// Output verbosity when no flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

/// Output verbosity as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

impl StartcheckConfig {
    /// Data file path, relative paths resolved against `root`.
    pub fn data_file(&self, root: &Path) -> PathBuf {
        resolve(root, self.data_file.as_deref(), DEFAULT_DATA_FILE)
    }

    /// Report file path, relative paths resolved against `root`.
    pub fn report_file(&self, root: &Path) -> PathBuf {
        resolve(root, self.report_file.as_deref(), DEFAULT_REPORT_FILE)
    }
}

fn resolve(root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| Path::new(default));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
