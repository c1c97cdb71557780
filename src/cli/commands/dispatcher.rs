//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, FillArgs};
use crate::config::{load_config, StartcheckConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: StartcheckConfig,
    data_file: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher from an already loaded config.
    ///
    /// `data_file` overrides the configured data file when given.
    pub fn new(project_root: PathBuf, config: StartcheckConfig, data_file: Option<PathBuf>) -> Self {
        let data_file = data_file.unwrap_or_else(|| config.data_file(&project_root));
        Self {
            project_root,
            config,
            data_file,
        }
    }

    /// Load config for the CLI's flags and create a dispatcher.
    pub fn from_cli(project_root: PathBuf, cli: &Cli) -> Result<Self> {
        let config = load_config(&project_root, cli.config.as_deref())?;
        Ok(Self::new(project_root, config, cli.data_file.clone()))
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the loaded config.
    pub fn config(&self) -> &StartcheckConfig {
        &self.config
    }

    /// Data file every command reads and writes.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Report file used by a bare `report --output`.
    pub fn report_file(&self) -> PathBuf {
        self.config.report_file(&self.project_root)
    }

    /// Output mode from flags, then config, then Normal.
    pub fn output_mode(&self, cli: &Cli) -> OutputMode {
        if cli.quiet {
            OutputMode::Quiet
        } else if cli.verbose {
            OutputMode::Verbose
        } else {
            self.config
                .default_output
                .map(OutputMode::from)
                .unwrap_or_default()
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Using data file {}", self.data_file.display());

        match &cli.command {
            Some(Commands::Fill(args)) => {
                let cmd = super::fill::FillCommand::new(&self.data_file, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Set(args)) => {
                let cmd = super::set::SetCommand::new(&self.data_file, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.data_file, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Report(args)) => {
                let cmd = super::report::ReportCommand::new(
                    &self.data_file,
                    self.report_file(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(&self.data_file, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to fill with default args
                let cmd = super::fill::FillCommand::new(&self.data_file, FillArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
