//! Export command implementation.
//!
//! The `startcheck export` command prints the checklist data as it is
//! persisted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::form::FormSession;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    data_file: PathBuf,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(data_file: &Path, args: ExportArgs) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = FormSession::open(&self.data_file);
        let json = session.export_json()?;

        match &self.args.output {
            None => ui.emit(&format!("{}\n", json)),
            Some(path) => {
                if let Err(e) = fs::write(path, &json) {
                    ui.error(&format!("Failed to write {}: {}", path.display(), e));
                    return Ok(CommandResult::failure(1));
                }
                ui.success(&format!("Checklist data written to {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateStore;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn export_includes_defaults() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ExportCommand::new(&temp.path().join("none.json"), ExportArgs::default())
            .execute(&mut ui)
            .unwrap();

        let store = StateStore::from_json(ui.emitted()).unwrap();
        assert_eq!(store.checkboxes.len(), 36);
        assert_eq!(store.inputs.len(), 23);
    }

    #[test]
    fn export_to_file_loads_back() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("checklist_data.json");
        fs::write(&data, r#"{"checkboxes": {"oil_level": true}, "inputs": {}}"#).unwrap();
        let out = temp.path().join("copy.json");
        let mut ui = MockUI::new();

        let args = ExportArgs {
            output: Some(out.clone()),
        };
        ExportCommand::new(&data, args).execute(&mut ui).unwrap();

        assert!(StateStore::load(&out).checkbox("oil_level"));
        assert!(ui.has_success("copy.json"));
    }
}
