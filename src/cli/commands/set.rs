//! Set command implementation.
//!
//! The `startcheck set <key> <value>` command edits one field and saves.

use std::path::{Path, PathBuf};

use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::form::FormSession;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The set command implementation.
pub struct SetCommand {
    data_file: PathBuf,
    args: SetArgs,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(data_file: &Path, args: SetArgs) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            args,
        }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = FormSession::open(&self.data_file);
        let value = session.on_field_changed(&self.args.key, &self.args.value)?;

        if let Err(e) = session.on_save_clicked() {
            ui.error(&format!("Failed to save data: {}", e));
            return Ok(CommandResult::failure(1));
        }

        let label = session
            .checklist()
            .label_for(&self.args.key)
            .unwrap_or_else(|| self.args.key.clone());
        ui.success(&format!("{}: {}", label, value.display()));
        Ok(CommandResult::success())
    }
}
