//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripted/headless use
//! - [`MockUI`] for tests
//! - Prompts, tables and theming
//!
//! # Example
//!
//! ```
//! use startcheck::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Checklist");
//! ui.success("Data saved successfully!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use table::Table;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, StartcheckTheme};

use crate::error::{Result, StartcheckError};
use crate::form::parse_checkbox;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a subsection title.
    fn show_subheader(&mut self, title: &str) {
        self.message(title);
    }

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str) {
        self.message(hint);
    }

    /// Show progress (e.g., "Section 3 of 5").
    fn show_progress(&mut self, current: usize, total: usize);

    /// Write requested data (CSV, JSON) to standard output.
    ///
    /// Unlike status messages, data is written in every output mode.
    fn emit(&mut self, data: &str);

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (the checklist field key).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Yes/no prompt for a checkbox.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// Free-text prompt; an empty default is left unset.
    pub fn input(key: &str, question: &str, default: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: (!default.is_empty()).then(|| default.to_string()),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input (may be left empty).
    Input,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::String(_) => None,
        }
    }
}

/// Read a checkbox answer given as text (env overrides, mock responses).
pub(crate) fn checkbox_answer(key: &str, raw: &str) -> Result<PromptResult> {
    parse_checkbox(raw)
        .map(PromptResult::Bool)
        .ok_or_else(|| StartcheckError::InvalidCheckboxValue {
            key: key.to_string(),
            value: raw.to_string(),
        })
}
