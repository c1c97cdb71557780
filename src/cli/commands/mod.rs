//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves the
//! config and data file once and routes each subcommand to its
//! implementation.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod fill;
pub mod report;
pub mod set;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
