//! Shared display helpers for checklist rendering.
//!
//! Used by `fill` and `show` so reference tables and progress read the
//! same everywhere.

use crate::checklist::ReferenceTable;
use crate::form::Completion;
use crate::state::StateStore;
use crate::ui::{Table, UserInterface};

const NOTES_WIDTH: usize = 48;

/// Build the box-drawn table for a reference table.
///
/// With a store, an "Actual Value" column shows what has been recorded.
pub fn reference_table(table: &ReferenceTable, store: Option<&StateStore>) -> Table {
    let mut headers = vec!["Parameter", table.value_heading];
    if store.is_some() {
        headers.push("Actual Value");
    }
    headers.push("Notes");
    let notes_column = headers.len() - 1;

    let mut rendered = Table::new(headers).with_max_width(notes_column, NOTES_WIDTH);
    for (key, row) in table.keyed_rows() {
        let mut cells = vec![row.parameter, row.expected_or_target];
        if let Some(store) = store {
            cells.push(store.input(&key));
        }
        cells.push(row.notes);
        rendered.add_row(cells);
    }
    rendered
}

/// One-line progress summary.
pub fn completion_line(completion: &Completion) -> String {
    format!(
        "{}/{} checks done, {}/{} fields filled ({}%)",
        completion.checked,
        completion.checkboxes,
        completion.filled,
        completion.inputs,
        completion.percent()
    )
}

/// Print the progress summary, as a success once everything is done.
pub fn show_completion(ui: &mut dyn UserInterface, completion: &Completion) {
    let line = completion_line(completion);
    if completion.is_complete() {
        ui.success(&line);
    } else {
        ui.message(&line);
    }
}
