//! Static checklist definition.
//!
//! The checklist is a fixed tree of sections → subsections → entries. Each
//! entry is a boolean check, a free-text field, or a reference table whose
//! rows pair an expected/target value with a free-text "actual value" input.
//!
//! - [`definition`] - the startup checklist itself
//! - [`reference`] - the pre-start and idle parameter tables
//!
//! # Example
//!
//! ```
//! use startcheck::checklist::{ItemKind, CHECKLIST};
//!
//! assert_eq!(CHECKLIST.field_kind("battery_terminals"), Some(ItemKind::Boolean));
//! assert_eq!(CHECKLIST.field_kind("param_0"), Some(ItemKind::Text));
//! assert_eq!(CHECKLIST.field_kind("bilge_pump"), None);
//! ```

pub mod definition;
pub mod reference;

pub use definition::CHECKLIST;
pub use reference::{IDLE_PARAMETERS, PRE_START_PARAMETERS};

/// Kind of value an item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Checkbox, stored under `checkboxes`.
    Boolean,
    /// Free text, stored under `inputs`.
    Text,
}

/// One boolean or free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Unique key in the state store.
    pub key: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
    pub kind: ItemKind,
    /// Input hint such as `YYYY-MM-DD`.
    pub placeholder: Option<&'static str>,
}

impl ChecklistItem {
    /// A checkbox item.
    pub const fn check(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ItemKind::Boolean,
            placeholder: None,
        }
    }

    /// A free-text item.
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ItemKind::Text,
            placeholder: None,
        }
    }

    /// A free-text item with an input hint.
    pub const fn text_with_hint(
        key: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: ItemKind::Text,
            placeholder: Some(placeholder),
        }
    }

    /// Whether the value is a date the user types by hand.
    pub fn is_date(&self) -> bool {
        self.placeholder == Some("YYYY-MM-DD")
    }
}

/// One row of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRow {
    pub parameter: &'static str,
    /// Expected (pre-start) or target (idle) value.
    pub expected_or_target: &'static str,
    pub notes: &'static str,
}

/// A table of reference rows, each paired with an "actual value" input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTable {
    /// Section name used in reports.
    pub title: &'static str,
    /// Column heading for `expected_or_target`.
    pub value_heading: &'static str,
    /// Input keys are `{key_prefix}{row index}`.
    pub key_prefix: &'static str,
    pub rows: &'static [ReferenceRow],
    /// Guidance printed under the table.
    pub notes: &'static str,
}

impl ReferenceTable {
    /// Store key for the actual value of row `index`.
    pub fn input_key(&self, index: usize) -> String {
        format!("{}{}", self.key_prefix, index)
    }

    /// Rows paired with their store keys, in table order.
    pub fn keyed_rows(&self) -> impl Iterator<Item = (String, &ReferenceRow)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (self.input_key(i), row))
    }

    /// Whether `key` is the input key of one of this table's rows.
    pub fn owns_key(&self, key: &str) -> bool {
        key.strip_prefix(self.key_prefix)
            .and_then(|idx| idx.parse::<usize>().ok())
            .is_some_and(|idx| idx < self.rows.len() && self.input_key(idx) == key)
    }
}

/// An entry in a subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Item(ChecklistItem),
    Table(&'static ReferenceTable),
}

/// A titled group of entries (e.g. "1.1 Battery").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsection {
    pub title: Option<&'static str>,
    pub entries: &'static [Entry],
}

/// A numbered checklist section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub subsections: &'static [Subsection],
    /// Bullet points shown after the section.
    pub notes: &'static [&'static str],
}

impl Section {
    /// Heading as displayed, e.g. "1. Pre-Start Checks".
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    /// All entries of the section in order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.subsections.iter().flat_map(|s| s.entries.iter())
    }
}

/// The whole form: metadata, numbered sections, finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checklist {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub metadata: &'static [ChecklistItem],
    pub sections: &'static [Section],
    pub finalization: &'static [ChecklistItem],
}

impl Checklist {
    /// Look up a section by its number.
    pub fn section(&self, number: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }

    /// Every item (metadata, section items, finalization) in form order.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> + '_ {
        let section_items = self.sections.iter().flat_map(|s| {
            s.entries().filter_map(|e| match e {
                Entry::Item(item) => Some(item),
                Entry::Table(_) => None,
            })
        });

        self.metadata
            .iter()
            .chain(section_items)
            .chain(self.finalization.iter())
    }

    /// Checkbox items in form order.
    pub fn checkbox_items(&self) -> impl Iterator<Item = &ChecklistItem> + '_ {
        self.items().filter(|i| i.kind == ItemKind::Boolean)
    }

    /// Free-text items in form order.
    pub fn text_items(&self) -> impl Iterator<Item = &ChecklistItem> + '_ {
        self.items().filter(|i| i.kind == ItemKind::Text)
    }

    /// Reference tables in form order.
    pub fn reference_tables(&self) -> impl Iterator<Item = &'static ReferenceTable> + '_ {
        self.sections.iter().flat_map(|s| {
            s.entries().filter_map(|e| match e {
                Entry::Table(table) => Some(*table),
                Entry::Item(_) => None,
            })
        })
    }

    /// Every key stored under `inputs`: text items then table rows.
    pub fn input_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.text_items().map(|i| i.key.to_string()).collect();
        for table in self.reference_tables() {
            keys.extend(table.keyed_rows().map(|(key, _)| key));
        }
        keys
    }

    /// Resolve which map a key belongs to, if it is part of the checklist.
    pub fn field_kind(&self, key: &str) -> Option<ItemKind> {
        if let Some(item) = self.items().find(|i| i.key == key) {
            return Some(item.kind);
        }
        if self.reference_tables().any(|t| t.owns_key(key)) {
            return Some(ItemKind::Text);
        }
        None
    }

    /// Human-readable label for a key.
    pub fn label_for(&self, key: &str) -> Option<String> {
        if let Some(item) = self.items().find(|i| i.key == key) {
            return Some(item.label.to_string());
        }
        self.reference_tables()
            .flat_map(|t| t.keyed_rows())
            .find(|(k, _)| k == key)
            .map(|(_, row)| format!("Actual Value for {}", row.parameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for item in CHECKLIST.items() {
            assert!(seen.insert(item.key.to_string()), "duplicate {}", item.key);
        }
        for key in CHECKLIST.input_keys() {
            if CHECKLIST.text_items().any(|i| i.key == key) {
                continue;
            }
            assert!(seen.insert(key.clone()), "duplicate {}", key);
        }
    }

    #[test]
    fn checkbox_order_follows_definition() {
        let keys: Vec<_> = CHECKLIST.checkbox_items().map(|i| i.key).collect();
        assert_eq!(keys.first(), Some(&"battery_terminals"));
        assert_eq!(keys.last(), Some(&"store_equipment"));
        assert_eq!(keys.len(), 36);
    }

    #[test]
    fn tables_are_in_form_order() {
        let titles: Vec<_> = CHECKLIST.reference_tables().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Pre-Start Parameters", "Idle Parameters"]);
    }

    #[test]
    fn input_keys_include_table_rows() {
        let keys = CHECKLIST.input_keys();
        assert!(keys.contains(&"date".to_string()));
        assert!(keys.contains(&"param_5".to_string()));
        assert!(keys.contains(&"idle_param_8".to_string()));
        assert!(!keys.contains(&"idle_param_9".to_string()));
        assert_eq!(keys.len(), 8 + 6 + 9);
    }

    #[test]
    fn field_kind_resolves_all_maps() {
        assert_eq!(CHECKLIST.field_kind("oil_level"), Some(ItemKind::Boolean));
        assert_eq!(CHECKLIST.field_kind("technician"), Some(ItemKind::Text));
        assert_eq!(CHECKLIST.field_kind("idle_param_3"), Some(ItemKind::Text));
        assert_eq!(CHECKLIST.field_kind("param_6"), None);
        assert_eq!(CHECKLIST.field_kind("param_01"), None);
    }

    #[test]
    fn owns_key_rejects_other_prefixes() {
        assert!(PRE_START_PARAMETERS.owns_key("param_0"));
        assert!(!PRE_START_PARAMETERS.owns_key("idle_param_0"));
        assert!(IDLE_PARAMETERS.owns_key("idle_param_0"));
        assert!(!IDLE_PARAMETERS.owns_key("idle_param_x"));
    }

    #[test]
    fn label_for_table_row() {
        assert_eq!(
            CHECKLIST.label_for("idle_param_0").as_deref(),
            Some("Actual Value for Engine RPM")
        );
        assert_eq!(CHECKLIST.label_for("signature").as_deref(), Some("Signature"));
        assert_eq!(CHECKLIST.label_for("nope"), None);
    }

    #[test]
    fn section_lookup() {
        let section = CHECKLIST.section(3).unwrap();
        assert_eq!(section.heading(), "3. Engine Start and Idle Monitoring");
        assert!(CHECKLIST.section(9).is_none());
    }

    #[test]
    fn date_items_are_detected() {
        let dates: Vec<_> = CHECKLIST
            .text_items()
            .filter(|i| i.is_date())
            .map(|i| i.key)
            .collect();
        assert_eq!(dates, vec!["date", "date_completed"]);
    }
}
