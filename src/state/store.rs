//! Checklist state storage.
//!
//! The store is a pair of maps keyed by checklist item key: booleans for
//! checkboxes and strings for free-text inputs. It is read from a JSON file
//! when a session starts and written back only on an explicit save.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::checklist::Checklist;
use crate::error::{Result, StartcheckError};

/// File name used when no data file is configured.
pub const DEFAULT_DATA_FILE: &str = "checklist_data.json";

/// User-entered values for one checklist session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateStore {
    /// Checkbox values by item key.
    pub checkboxes: BTreeMap<String, bool>,

    /// Free-text values by item key.
    pub inputs: BTreeMap<String, String>,
}

impl StateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from disk.
    ///
    /// A missing or unreadable file, or one that does not parse, yields an
    /// empty store. The whole file is discarded on any parse error.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No checklist data at {}, starting empty", path.display());
                return Self::new();
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}; starting empty", path.display(), e);
                return Self::new();
            }
        };

        match Self::from_json(&content) {
            Ok(store) => {
                tracing::debug!(
                    "Loaded {} checkboxes and {} inputs from {}",
                    store.checkboxes.len(),
                    store.inputs.len(),
                    path.display()
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed checklist data at {}: {}",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Parse a store from its JSON form.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize to JSON indented by four spaces.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| anyhow::anyhow!("Failed to serialize checklist data: {}", e))?;

        String::from_utf8(buf)
            .map_err(|e| anyhow::anyhow!("Serialized checklist data is not UTF-8: {}", e).into())
    }

    /// Save state to disk using atomic write.
    ///
    /// Writes a temp sibling and renames it over the target, so the data
    /// file is never left partially written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;

        let save_failed = |e: std::io::Error| StartcheckError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(save_failed)?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(save_failed)?;
        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            save_failed(e)
        })?;

        tracing::debug!("Saved checklist data to {}", path.display());
        Ok(())
    }

    /// Checkbox value, recording `false` if the key is absent.
    pub fn get_checkbox(&mut self, key: &str) -> bool {
        *self.checkboxes.entry(key.to_string()).or_insert(false)
    }

    /// Overwrite a checkbox value.
    pub fn set_checkbox(&mut self, key: &str, value: bool) {
        self.checkboxes.insert(key.to_string(), value);
    }

    /// Input value, recording `""` if the key is absent.
    pub fn get_input(&mut self, key: &str) -> String {
        self.inputs.entry(key.to_string()).or_default().clone()
    }

    /// Overwrite an input value.
    pub fn set_input(&mut self, key: &str, value: &str) {
        self.inputs.insert(key.to_string(), value.to_string());
    }

    /// Checkbox value without recording a default.
    pub fn checkbox(&self, key: &str) -> bool {
        self.checkboxes.get(key).copied().unwrap_or(false)
    }

    /// Input value without recording a default.
    pub fn input(&self, key: &str) -> &str {
        self.inputs.get(key).map(String::as_str).unwrap_or("")
    }

    /// Record defaults for every key the checklist renders.
    pub fn register_defaults(&mut self, checklist: &Checklist) {
        for item in checklist.checkbox_items() {
            self.get_checkbox(item.key);
        }
        for key in checklist.input_keys() {
            self.get_input(&key);
        }
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.checkboxes.is_empty() && self.inputs.is_empty()
    }
}
