//! Session state and command handlers.

use std::path::{Path, PathBuf};

use crate::checklist::{Checklist, ItemKind, CHECKLIST};
use crate::error::{Result, StartcheckError};
use crate::report::{generate_report, Report};
use crate::state::StateStore;

/// A value pushed through [`FormSession::on_field_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Checkbox(bool),
    Text(String),
}

impl FieldValue {
    /// Display form, matching the report's wording for checkboxes.
    pub fn display(&self) -> String {
        match self {
            Self::Checkbox(true) => "Checked".to_string(),
            Self::Checkbox(false) => "Unchecked".to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// How much of the checklist has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub checked: usize,
    pub checkboxes: usize,
    pub filled: usize,
    pub inputs: usize,
}

impl Completion {
    /// Share of checked boxes and non-empty inputs, 0-100.
    pub fn percent(&self) -> usize {
        let total = self.checkboxes + self.inputs;
        if total == 0 {
            return 100;
        }
        (self.checked + self.filled) * 100 / total
    }

    /// Check if every box is checked and every input filled.
    pub fn is_complete(&self) -> bool {
        self.checked == self.checkboxes && self.filled == self.inputs
    }
}

/// Read a user-typed checkbox value.
///
/// Case-insensitive; an empty value reads as unchecked.
pub fn parse_checkbox(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" | "checked" | "x" => Some(true),
        "false" | "no" | "n" | "0" | "off" | "unchecked" | "" => Some(false),
        _ => None,
    }
}

/// One checklist session bound to a data file.
#[derive(Debug)]
pub struct FormSession {
    checklist: &'static Checklist,
    store: StateStore,
    data_file: PathBuf,
    dirty: bool,
}

impl FormSession {
    /// Open a session for the startup checklist.
    ///
    /// Loads the data file (an unreadable file yields an empty store) and
    /// records defaults for every key the checklist renders.
    pub fn open(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        let store = StateStore::load(&data_file);
        Self::with_store(&CHECKLIST, store, data_file)
    }

    /// Open a session over an existing store.
    pub fn with_store(
        checklist: &'static Checklist,
        mut store: StateStore,
        data_file: impl Into<PathBuf>,
    ) -> Self {
        store.register_defaults(checklist);
        Self {
            checklist,
            store,
            data_file: data_file.into(),
            dirty: false,
        }
    }

    pub fn checklist(&self) -> &'static Checklist {
        self.checklist
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Check if there are edits not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current checkbox value (get-or-default).
    pub fn checkbox(&mut self, key: &str) -> bool {
        self.store.get_checkbox(key)
    }

    /// Current input value (get-or-default).
    pub fn input(&mut self, key: &str) -> String {
        self.store.get_input(key)
    }

    /// A checkbox was toggled.
    pub fn on_checkbox_changed(&mut self, key: &str, value: bool) {
        if self.store.checkbox(key) != value {
            self.dirty = true;
        }
        tracing::debug!("{} -> {}", key, value);
        self.store.set_checkbox(key, value);
    }

    /// A text field was edited.
    pub fn on_text_changed(&mut self, key: &str, value: &str) {
        if self.store.input(key) != value {
            self.dirty = true;
        }
        tracing::debug!("{} -> {:?}", key, value);
        self.store.set_input(key, value);
    }

    /// A field was edited by key, with its value given as text.
    ///
    /// The key decides the map: checkbox keys parse `raw` with
    /// [`parse_checkbox`], input keys take it verbatim.
    pub fn on_field_changed(&mut self, key: &str, raw: &str) -> Result<FieldValue> {
        match self.checklist.field_kind(key) {
            Some(ItemKind::Boolean) => {
                let value =
                    parse_checkbox(raw).ok_or_else(|| StartcheckError::InvalidCheckboxValue {
                        key: key.to_string(),
                        value: raw.to_string(),
                    })?;
                self.on_checkbox_changed(key, value);
                Ok(FieldValue::Checkbox(value))
            }
            Some(ItemKind::Text) => {
                self.on_text_changed(key, raw);
                Ok(FieldValue::Text(raw.to_string()))
            }
            None => Err(StartcheckError::UnknownField {
                key: key.to_string(),
            }),
        }
    }

    /// Save was requested.
    pub fn on_save_clicked(&mut self) -> Result<()> {
        self.store.save(&self.data_file)?;
        self.dirty = false;
        tracing::info!("Checklist saved to {}", self.data_file.display());
        Ok(())
    }

    /// Report export was requested.
    pub fn on_export_clicked(&self) -> Report {
        generate_report(&self.store, self.checklist)
    }

    /// The store as it would be written by a save.
    pub fn export_json(&self) -> Result<String> {
        self.store.to_json()
    }

    /// Progress against the checklist.
    pub fn completion(&self) -> Completion {
        let checkbox_keys: Vec<_> = self.checklist.checkbox_items().map(|i| i.key).collect();
        let input_keys = self.checklist.input_keys();

        Completion {
            checked: checkbox_keys
                .iter()
                .filter(|k| self.store.checkbox(k))
                .count(),
            checkboxes: checkbox_keys.len(),
            filled: input_keys
                .iter()
                .filter(|k| !self.store.input(k).trim().is_empty())
                .count(),
            inputs: input_keys.len(),
        }
    }
}
