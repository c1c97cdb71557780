//! Interactive prompts.

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{Result, StartcheckError};

use super::{Prompt, PromptResult, PromptType};
use crate::form::parse_checkbox;

/// Convert dialoguer errors to StartcheckError.
fn map_dialoguer_err(e: dialoguer::Error) -> StartcheckError {
    StartcheckError::Io(e.into())
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_deref()
        .and_then(parse_checkbox)
        .unwrap_or(false);

    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

// The current value is pre-filled so it can be edited or cleared.
fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let mut input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);

    if let Some(current) = &prompt.default {
        input = input.with_initial_text(current.clone());
    }

    let result = input.interact_text_on(term).map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_become_io() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "ctrl-c",
        ));
        assert!(matches!(map_dialoguer_err(err), StartcheckError::Io(_)));
    }
}
