//! Report command implementation.
//!
//! The `startcheck report` command exports the CSV report to stdout or a
//! file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::form::FormSession;
use crate::report::Report;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    data_file: PathBuf,
    report_file: PathBuf,
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    ///
    /// `report_file` is used when `--output` is given without a path.
    pub fn new(data_file: &Path, report_file: PathBuf, args: ReportArgs) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
            report_file,
            args,
        }
    }

    /// Where the report goes; `None` means stdout.
    pub fn destination(&self) -> Option<&Path> {
        match &self.args.output {
            None => None,
            Some(Some(path)) => Some(path.as_path()),
            Some(None) => Some(self.report_file.as_path()),
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = FormSession::open(&self.data_file);
        let report = session.on_export_clicked();

        let Some(path) = self.destination() else {
            ui.emit(&report.to_csv());
            return Ok(CommandResult::success());
        };

        if let Err(e) = write_report(&report, path) {
            ui.error(&format!("Failed to write report to {}: {}", path.display(), e));
            return Ok(CommandResult::failure(1));
        }

        tracing::debug!("Wrote {} report rows", report.len());
        ui.success(&format!("Report written to {}", path.display()));
        Ok(CommandResult::success())
    }
}

fn write_report(report: &Report, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = report.write_csv(BufWriter::new(file))?;
    writer.into_inner().map_err(|e| e.into_error())?;
    Ok(())
}
