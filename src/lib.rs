//! Startcheck - First-startup diagnostic checklist for a marine V8.
//!
//! Startcheck keeps the checkboxes and free-text values of a startup
//! checklist in a JSON data file and exports them as a CSV report.
//!
//! # Modules
//!
//! - [`checklist`] - Static checklist content and reference tables
//! - [`cli`] - Command-line form host
//! - [`config`] - Project configuration loading
//! - [`error`] - Error types and result aliases
//! - [`form`] - Form session and command handlers
//! - [`report`] - CSV report generation
//! - [`state`] - Checklist data store and persistence
//! - [`ui`] - Prompts, tables and terminal output
//!
//! # Example
//!
//! ```
//! use startcheck::form::FormSession;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut session = FormSession::open(dir.path().join("checklist_data.json"));
//! session.on_field_changed("oil_level", "yes").unwrap();
//! session.on_save_clicked().unwrap();
//!
//! let report = session.on_export_clicked();
//! assert!(report.contains("Checklist", "oil_level", "Checked"));
//! ```

pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod report;
pub mod state;
pub mod ui;

pub use error::{Result, StartcheckError};
