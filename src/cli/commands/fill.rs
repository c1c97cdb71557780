//! Fill command implementation.
//!
//! The `startcheck fill` command walks the checklist section by section,
//! prompting for every checkbox, text field and reference table value.

use std::path::{Path, PathBuf};

use crate::checklist::{ChecklistItem, Entry, ItemKind, ReferenceTable, Section};
use crate::cli::args::FillArgs;
use crate::error::{Result, StartcheckError};
use crate::form::FormSession;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The fill command implementation.
pub struct FillCommand {
    data_file: PathBuf,
    args: FillArgs,
}

impl FillCommand {
    /// Create a new fill command.
    pub fn new(data_file: &Path, args: FillArgs) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FillArgs {
        &self.args
    }
}

impl Command for FillCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = FormSession::open(&self.data_file);
        let checklist = session.checklist();

        let sections: Vec<&Section> = match self.args.section {
            Some(number) => vec![checklist
                .section(number)
                .ok_or(StartcheckError::UnknownSection { number })?],
            None => checklist.sections.iter().collect(),
        };
        let whole_form = self.args.section.is_none();

        ui.show_header(checklist.title);
        ui.show_hint(checklist.subtitle);

        if whole_form {
            for item in checklist.metadata {
                fill_item(&mut session, ui, item)?;
            }
        }

        let total = sections.len();
        for (index, section) in sections.into_iter().enumerate() {
            ui.show_progress(index + 1, total);
            fill_section(&mut session, ui, section)?;
        }

        if whole_form {
            ui.show_subheader("Finalization");
            for item in checklist.finalization {
                fill_item(&mut session, ui, item)?;
            }
        }

        if self.args.no_save {
            if session.is_dirty() {
                ui.warning("Changes not saved (--no-save)");
            }
        } else if let Err(e) = session.on_save_clicked() {
            ui.error(&format!("Failed to save data: {}", e));
            return Ok(CommandResult::failure(1));
        } else {
            ui.success("Data saved successfully!");
        }

        display::show_completion(ui, &session.completion());
        Ok(CommandResult::success())
    }
}

fn fill_section(
    session: &mut FormSession,
    ui: &mut dyn UserInterface,
    section: &Section,
) -> Result<()> {
    ui.show_header(&section.heading());
    if !section.description.is_empty() {
        ui.show_hint(section.description);
    }

    for subsection in section.subsections {
        if let Some(title) = subsection.title {
            ui.show_subheader(title);
        }
        for entry in subsection.entries {
            match entry {
                Entry::Item(item) => fill_item(session, ui, item)?,
                Entry::Table(table) => fill_table(session, ui, table)?,
            }
        }
    }

    for note in section.notes {
        ui.show_hint(note);
    }
    Ok(())
}

fn fill_item(
    session: &mut FormSession,
    ui: &mut dyn UserInterface,
    item: &ChecklistItem,
) -> Result<()> {
    match item.kind {
        ItemKind::Boolean => {
            let current = session.checkbox(item.key);
            let answer = ui.prompt(&Prompt::confirm(item.key, item.label, current))?;
            session.on_checkbox_changed(item.key, answer.as_bool().unwrap_or(current));
        }
        ItemKind::Text => {
            let mut current = session.input(item.key);
            if current.is_empty() && item.is_date() {
                current = today();
            }
            let question = match item.placeholder {
                Some(hint) => format!("{} ({})", item.label, hint),
                None => item.label.to_string(),
            };
            let answer = ui.prompt(&Prompt::input(item.key, &question, &current))?;
            session.on_text_changed(item.key, &answer.as_string());
        }
    }
    Ok(())
}

fn fill_table(
    session: &mut FormSession,
    ui: &mut dyn UserInterface,
    table: &ReferenceTable,
) -> Result<()> {
    ui.show_subheader(table.title);
    ui.message(&display::reference_table(table, None).render());

    for (key, row) in table.keyed_rows() {
        let current = session.input(&key);
        let question = format!(
            "Actual value for {} ({})",
            row.parameter, row.expected_or_target
        );
        let answer = ui.prompt(&Prompt::input(&key, &question, &current))?;
        session.on_text_changed(&key, &answer.as_string());
    }

    if !table.notes.is_empty() {
        ui.show_hint(table.notes);
    }
    Ok(())
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
