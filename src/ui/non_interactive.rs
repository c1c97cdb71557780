//! Non-interactive UI for scripted/headless use.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{Result, StartcheckError};

use super::{checkbox_answer, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "STARTCHECK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `STARTCHECK_PROMPT_<KEY>` environment
/// variables, falling back to the prompt's default (the current value).
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_confirm = prompt.prompt_type == PromptType::Confirm;

        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            if is_confirm {
                return checkbox_answer(&prompt.key, value);
            }
            return Ok(PromptResult::String(value.clone()));
        }

        match (&prompt.default, is_confirm) {
            (Some(default), true) => checkbox_answer(&prompt.key, default),
            (Some(default), false) => Ok(PromptResult::String(default.clone())),
            (None, false) => Ok(PromptResult::String(String::new())),
            (None, true) => Err(StartcheckError::PromptUnavailable {
                key: prompt.key.clone(),
                message: "no default value in non-interactive mode".to_string(),
            }),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn show_subheader(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("{}", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_details() {
            println!("{}", hint);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_progress() {
            println!("[{}/{}]", current, total);
        }
    }

    fn emit(&mut self, data: &str) {
        let mut out = std::io::stdout();
        out.write_all(data.as_bytes()).ok();
        out.flush().ok();
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_with(overrides: &[(&str, &str)]) -> NonInteractiveUI {
        let map = overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NonInteractiveUI::with_overrides(OutputMode::Normal, map)
    }

    #[test]
    fn confirm_uses_default() {
        let mut ui = ui_with(&[]);
        let prompt = Prompt::confirm("oil_level", "Check oil level", true);
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn input_uses_default() {
        let mut ui = ui_with(&[]);
        let prompt = Prompt::input("technician", "Technician", "Sam");
        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("Sam".into())
        );
    }

    #[test]
    fn input_without_default_is_empty() {
        let mut ui = ui_with(&[]);
        let prompt = Prompt::input("technician", "Technician", "");
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::String(String::new()));
    }

    #[test]
    fn confirm_without_default_fails() {
        let mut ui = ui_with(&[]);
        let mut prompt = Prompt::confirm("oil_level", "Check oil level", false);
        prompt.default = None;

        let err = ui.prompt(&prompt).unwrap_err();
        assert!(matches!(err, StartcheckError::PromptUnavailable { .. }));
    }

    #[test]
    fn env_override_answers_by_key() {
        let mut ui = ui_with(&[
            ("STARTCHECK_PROMPT_OIL_LEVEL", "yes"),
            ("STARTCHECK_PROMPT_IDLE_PARAM_0", "720"),
        ]);

        let confirm = Prompt::confirm("oil_level", "Check oil level", false);
        assert_eq!(ui.prompt(&confirm).unwrap(), PromptResult::Bool(true));

        let input = Prompt::input("idle_param_0", "Engine RPM", "");
        assert_eq!(
            ui.prompt(&input).unwrap(),
            PromptResult::String("720".into())
        );
    }

    #[test]
    fn env_override_accepts_checkbox_spellings() {
        let mut ui = ui_with(&[("STARTCHECK_PROMPT_OIL_LEVEL", "checked")]);
        let confirm = Prompt::confirm("oil_level", "Check oil level", false);
        assert_eq!(ui.prompt(&confirm).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn env_override_rejects_invalid_checkbox_value() {
        let mut ui = ui_with(&[("STARTCHECK_PROMPT_FUEL_LINES", "maybe")]);
        let confirm = Prompt::confirm("fuel_lines", "Inspect fuel lines", false);

        let err = ui.prompt(&confirm).unwrap_err();
        assert!(matches!(
            err,
            StartcheckError::InvalidCheckboxValue { ref key, ref value }
                if key == "fuel_lines" && value == "maybe"
        ));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
