//! Command-line form host.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ExportArgs, FillArgs, ReportArgs, SetArgs, ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
