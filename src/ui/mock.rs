//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use startcheck::ui::{MockUI, Prompt, PromptResult, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("technician", "Sam");
//!
//! let answer = ui.prompt(&Prompt::input("technician", "Technician", "")).unwrap();
//! assert_eq!(answer, PromptResult::String("Sam".to_string()));
//!
//! ui.success("Data saved successfully!");
//! assert!(ui.has_success("saved"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{checkbox_answer, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Prompts answer from `set_prompt_response`, then the default response,
/// then the prompt's own default.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    subheaders: Vec<String>,
    hints: Vec<String>,
    progress: Vec<(usize, usize)>,
    emitted: String,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    questions: Vec<String>,
    /// Fallback response for any prompt key not in `prompt_responses`.
    default_prompt_response: Option<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Set a default response for any prompt key not explicitly configured.
    pub fn set_default_prompt_response(&mut self, response: &str) {
        self.default_prompt_response = Some(response.to_string());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn subheaders(&self) -> &[String] {
        &self.subheaders
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
    }

    /// Everything written through `emit`, concatenated.
    pub fn emitted(&self) -> &str {
        &self.emitted
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Questions of the prompts shown, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn answer(prompt: &Prompt, response: &str) -> Result<PromptResult> {
        match prompt.prompt_type {
            PromptType::Confirm => checkbox_answer(&prompt.key, response),
            PromptType::Input => Ok(PromptResult::String(response.to_string())),
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());
        self.questions.push(prompt.question.clone());

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Self::answer(prompt, response);
        }

        if let Some(response) = &self.default_prompt_response {
            return Self::answer(prompt, response);
        }

        if let Some(default) = &prompt.default {
            return Self::answer(prompt, default);
        }

        Self::answer(prompt, "")
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_subheader(&mut self, title: &str) {
        self.subheaders.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn emit(&mut self, data: &str) {
        self.emitted.push_str(data);
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("saved");
        ui.warning("careful");
        ui.error("failed");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("saved"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("failed"));
    }

    #[test]
    fn configured_response_wins() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("oil_level", "yes");
        ui.set_default_prompt_response("no");

        let prompt = Prompt::confirm("oil_level", "Check oil level", false);
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn default_response_beats_prompt_default() {
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("yes");

        let prompt = Prompt::confirm("oil_leaks", "Check for leaks", false);
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn falls_back_to_prompt_default() {
        let mut ui = MockUI::new();
        let prompt = Prompt::input("technician", "Technician", "Sam");
        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("Sam".into())
        );
        assert_eq!(ui.prompts_shown(), &["technician".to_string()]);
    }

    #[test]
    fn confirm_response_uses_checkbox_spellings() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("oil_level", "x");
        ui.set_prompt_response("oil_leaks", "perhaps");

        let checked = Prompt::confirm("oil_level", "Check oil level", false);
        assert_eq!(ui.prompt(&checked).unwrap(), PromptResult::Bool(true));

        let invalid = Prompt::confirm("oil_leaks", "Check for leaks", false);
        assert!(ui.prompt(&invalid).is_err());
    }

    #[test]
    fn emit_accumulates() {
        let mut ui = MockUI::new();
        ui.emit("a,b\r\n");
        ui.emit("c,d\r\n");
        assert_eq!(ui.emitted(), "a,b\r\nc,d\r\n");
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
