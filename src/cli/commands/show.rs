//! Show command implementation.
//!
//! The `startcheck show` command prints the checklist with the values
//! recorded so far.

use std::path::{Path, PathBuf};

use crate::checklist::{ChecklistItem, Entry, ItemKind, Section};
use crate::cli::args::ShowArgs;
use crate::error::{Result, StartcheckError};
use crate::form::FormSession;
use crate::ui::{should_use_colors, StartcheckTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The show command implementation.
pub struct ShowCommand {
    data_file: PathBuf,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(data_file: &Path, args: ShowArgs) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = FormSession::open(&self.data_file);

        if self.args.json {
            let json = session.export_json()?;
            ui.emit(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            StartcheckTheme::new()
        } else {
            StartcheckTheme::plain()
        };
        let checklist = session.checklist();

        if let Some(number) = self.args.section {
            let section = checklist
                .section(number)
                .ok_or(StartcheckError::UnknownSection { number })?;
            show_section(&session, ui, &theme, section);
            return Ok(CommandResult::success());
        }

        ui.show_header(checklist.title);
        ui.show_hint(checklist.subtitle);
        for item in checklist.metadata {
            show_item(&session, ui, &theme, item);
        }

        for section in checklist.sections {
            show_section(&session, ui, &theme, section);
        }

        ui.show_subheader("Finalization");
        for item in checklist.finalization {
            show_item(&session, ui, &theme, item);
        }

        ui.message("");
        display::show_completion(ui, &session.completion());
        Ok(CommandResult::success())
    }
}

fn show_section(
    session: &FormSession,
    ui: &mut dyn UserInterface,
    theme: &StartcheckTheme,
    section: &Section,
) {
    ui.message("");
    ui.show_header(&section.heading());

    for subsection in section.subsections {
        if let Some(title) = subsection.title {
            ui.show_subheader(title);
        }
        for entry in subsection.entries {
            match entry {
                Entry::Item(item) => show_item(session, ui, theme, item),
                Entry::Table(table) => {
                    ui.show_subheader(table.title);
                    ui.message(&display::reference_table(table, Some(session.store())).render());
                }
            }
        }
    }

    for note in section.notes {
        ui.show_hint(note);
    }
}

fn show_item(
    session: &FormSession,
    ui: &mut dyn UserInterface,
    theme: &StartcheckTheme,
    item: &ChecklistItem,
) {
    let line = match item.kind {
        ItemKind::Boolean => {
            theme.format_checkbox(session.store().checkbox(item.key), item.label)
        }
        ItemKind::Text => format!("{}: {}", item.label, session.store().input(item.key)),
    };
    ui.message(&format!("  {}", line));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn write_data(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("checklist_data.json");
        fs::write(
            &path,
            r#"{"checkboxes": {"oil_level": true}, "inputs": {"technician": "Sam", "param_0": "12.6V"}}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn show_lists_values() {
        let temp = TempDir::new().unwrap();
        let path = write_data(&temp);
        let mut ui = MockUI::new();

        ShowCommand::new(&path, ShowArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Technician: Sam"));
        assert!(ui.has_message("Check oil level"));
        assert!(ui.has_message("12.6V"));
        assert!(ui.has_message("1/36 checks done"));
    }

    #[test]
    fn show_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checklist_data.json");
        let mut ui = MockUI::new();

        ShowCommand::new(&path, ShowArgs::default())
            .execute(&mut ui)
            .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn show_json_emits_store() {
        let temp = TempDir::new().unwrap();
        let path = write_data(&temp);
        let mut ui = MockUI::new();

        let args = ShowArgs {
            json: true,
            ..Default::default()
        };
        ShowCommand::new(&path, args).execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(ui.emitted()).unwrap();
        assert_eq!(value["checkboxes"]["oil_level"], true);
        assert_eq!(value["inputs"]["technician"], "Sam");
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn show_single_section() {
        let temp = TempDir::new().unwrap();
        let path = write_data(&temp);
        let mut ui = MockUI::new();

        let args = ShowArgs {
            section: Some(2),
            ..Default::default()
        };
        ShowCommand::new(&path, args).execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), &["2. Pre-Start Parameter Monitoring".to_string()]);
        assert!(!ui.has_message("Technician"));
    }
}
