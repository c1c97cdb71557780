//! Report generation.
//!
//! A report flattens the state store against the checklist into
//! `(Section, Field, Value)` rows, rendered as CSV by [`csv`].
//!
//! Rows always come out in the same order:
//! 1. Metadata (Date, Technician, Boat Hours)
//! 2. Every checkbox, as `Checked` / `Unchecked`
//! 3. Each reference table's actual values, one row per parameter
//! 4. Post-run free text (Codes Found, Actions Needed, Observations)
//! 5. Finalization (Signature, Date Completed)
//!
//! # Example
//!
//! ```
//! use startcheck::checklist::CHECKLIST;
//! use startcheck::report::generate_report;
//! use startcheck::state::StateStore;
//!
//! let mut store = StateStore::new();
//! store.set_checkbox("battery_terminals", true);
//!
//! let report = generate_report(&store, &CHECKLIST);
//! assert!(report.contains("Checklist", "battery_terminals", "Checked"));
//! assert!(report.contains("Metadata", "Date", ""));
//! ```

pub mod csv;

use crate::checklist::Checklist;
use crate::state::StateStore;

pub use self::csv::CsvWriter;

/// Column headings of the CSV export.
pub const HEADER: [&str; 3] = ["Section", "Field", "Value"];

/// File name offered for the CSV export.
pub const DEFAULT_REPORT_FILE: &str = "checklist_report.csv";

const CHECKLIST_SECTION: &str = "Checklist";

const METADATA_FIELDS: [(&str, &str); 3] = [
    ("date", "Date"),
    ("technician", "Technician"),
    ("boat_hours", "Boat Hours"),
];

const POST_RUN_FIELDS: [(&str, &str); 3] = [
    ("codes_found", "Codes Found"),
    ("actions_needed", "Actions Needed"),
    ("observations", "Observations"),
];

const FINALIZATION_FIELDS: [(&str, &str); 2] = [
    ("signature", "Signature"),
    ("date_completed", "Date Completed"),
];

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub section: String,
    pub field: String,
    pub value: String,
}

impl ReportRow {
    fn new(section: &str, field: &str, value: &str) -> Self {
        Self {
            section: section.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Flattened export of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Rows in report order (header excluded).
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check for an exact row.
    pub fn contains(&self, section: &str, field: &str, value: &str) -> bool {
        self.rows
            .iter()
            .any(|r| r.section == section && r.field == field && r.value == value)
    }

    /// Write the header and every row as CSV.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> std::io::Result<W> {
        let mut csv = CsvWriter::new(writer);
        csv.write_record(&HEADER)?;
        for row in &self.rows {
            csv.write_record(&[&row.section, &row.field, &row.value])?;
        }
        csv.into_inner()
    }

    /// Render the report as CSV text.
    pub fn to_csv(&self) -> String {
        // Writing into a Vec cannot fail.
        let buf = self.write_csv(Vec::new()).unwrap_or_default();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Build the report for a store.
///
/// Absent keys render as empty values (or `Unchecked`); no row is ever
/// omitted. Checkbox keys in the store that the checklist does not define
/// follow the defined ones.
pub fn generate_report(store: &StateStore, checklist: &Checklist) -> Report {
    let mut rows = Vec::new();

    for (key, field) in METADATA_FIELDS {
        rows.push(ReportRow::new("Metadata", field, store.input(key)));
    }

    for item in checklist.checkbox_items() {
        rows.push(checkbox_row(item.key, store.checkbox(item.key)));
    }
    for (key, value) in &store.checkboxes {
        if checklist.checkbox_items().all(|i| i.key != key.as_str()) {
            rows.push(checkbox_row(key, *value));
        }
    }

    for table in checklist.reference_tables() {
        for (key, row) in table.keyed_rows() {
            rows.push(ReportRow::new(table.title, row.parameter, store.input(&key)));
        }
    }

    for (key, field) in POST_RUN_FIELDS {
        rows.push(ReportRow::new("Post-Run", field, store.input(key)));
    }

    for (key, field) in FINALIZATION_FIELDS {
        rows.push(ReportRow::new("Finalization", field, store.input(key)));
    }

    tracing::debug!("Generated report with {} rows", rows.len());
    Report { rows }
}

fn checkbox_row(key: &str, checked: bool) -> ReportRow {
    let value = if checked { "Checked" } else { "Unchecked" };
    ReportRow::new(CHECKLIST_SECTION, key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{CHECKLIST, IDLE_PARAMETERS, PRE_START_PARAMETERS};

    fn expected_len(checkboxes: usize) -> usize {
        3 + checkboxes + PRE_START_PARAMETERS.rows.len() + IDLE_PARAMETERS.rows.len() + 3 + 2
    }

    #[test]
    fn empty_store_has_every_row() {
        let report = generate_report(&StateStore::new(), &CHECKLIST);
        assert_eq!(report.len(), expected_len(36));
        assert!(report.contains("Metadata", "Date", ""));
        assert!(report.contains("Checklist", "oil_level", "Unchecked"));
        assert!(report.contains("Finalization", "Date Completed", ""));
    }

    #[test]
    fn registered_store_has_same_row_count() {
        let mut store = StateStore::new();
        store.register_defaults(&CHECKLIST);
        let report = generate_report(&store, &CHECKLIST);
        assert_eq!(report.len(), expected_len(store.checkboxes.len()));
    }

    #[test]
    fn checked_box_renders_checked() {
        let mut store = StateStore::new();
        store.set_checkbox("battery_terminals", true);

        let report = generate_report(&store, &CHECKLIST);
        assert!(report.contains("Checklist", "battery_terminals", "Checked"));
        assert!(report.contains("Checklist", "battery_voltage", "Unchecked"));
    }

    #[test]
    fn sections_come_in_fixed_order() {
        let report = generate_report(&StateStore::new(), &CHECKLIST);
        let mut sections: Vec<&str> = Vec::new();
        for row in report.rows() {
            if sections.last() != Some(&row.section.as_str()) {
                sections.push(&row.section);
            }
        }
        assert_eq!(
            sections,
            vec![
                "Metadata",
                "Checklist",
                "Pre-Start Parameters",
                "Idle Parameters",
                "Post-Run",
                "Finalization"
            ]
        );
    }

    #[test]
    fn checkboxes_follow_definition_order_not_sorted_order() {
        let report = generate_report(&StateStore::new(), &CHECKLIST);
        let fields: Vec<_> = report
            .rows()
            .iter()
            .filter(|r| r.section == "Checklist")
            .map(|r| r.field.as_str())
            .take(3)
            .collect();
        assert_eq!(
            fields,
            vec!["battery_terminals", "battery_voltage", "battery_age"]
        );
    }

    #[test]
    fn reference_inputs_use_parameter_names() {
        let mut store = StateStore::new();
        store.set_input("param_0", "12.6V");
        store.set_input("idle_param_0", "700");

        let report = generate_report(&store, &CHECKLIST);
        assert!(report.contains("Pre-Start Parameters", "Battery Voltage", "12.6V"));
        assert!(report.contains("Idle Parameters", "Engine RPM", "700"));
        assert!(report.contains("Idle Parameters", "Battery Voltage", ""));
    }

    #[test]
    fn metadata_uses_short_field_names() {
        let mut store = StateStore::new();
        store.set_input("boat_hours", "412");
        let report = generate_report(&store, &CHECKLIST);
        assert!(report.contains("Metadata", "Boat Hours", "412"));
    }

    #[test]
    fn unknown_stored_checkbox_is_appended() {
        let mut store = StateStore::new();
        store.set_checkbox("bilge_blower", true);

        let report = generate_report(&store, &CHECKLIST);
        assert_eq!(report.len(), expected_len(37));

        let checklist_rows: Vec<_> = report
            .rows()
            .iter()
            .filter(|r| r.section == "Checklist")
            .collect();
        let last = checklist_rows.last().unwrap();
        assert_eq!(last.field, "bilge_blower");
        assert_eq!(last.value, "Checked");
    }

    #[test]
    fn csv_starts_with_header() {
        let csv = generate_report(&StateStore::new(), &CHECKLIST).to_csv();
        assert!(csv.starts_with("Section,Field,Value\r\nMetadata,Date,\r\n"));
        assert_eq!(csv.lines().count(), expected_len(36) + 1);
    }

    #[test]
    fn csv_quotes_free_text() {
        let mut store = StateStore::new();
        store.set_input("observations", "Oil, fuel OK");
        let csv = generate_report(&store, &CHECKLIST).to_csv();
        assert!(csv.contains("Post-Run,Observations,\"Oil, fuel OK\"\r\n"));
    }

    #[test]
    fn report_does_not_mutate_store() {
        let store = StateStore::new();
        let _ = generate_report(&store, &CHECKLIST);
        assert!(store.is_empty());
    }
}
