//! User input and interaction handling.
//! Provides the `Prompter` trait the value resolver talks to, a terminal
//! implementation backed by dialoguer, and a non-interactive one.

use std::sync::LazyLock;

use dialoguer::Input;
use log::debug;
use regex::Regex;

use crate::error::Result;

/// Checks a candidate answer, returning a message to show the user when it is
/// rejected.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Accepts syntactically valid addresses like `john@doe.com`.
pub fn validate_email(input: &str) -> std::result::Result<(), String> {
    if EMAIL_RE.is_match(input.trim()) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid email address", input))
    }
}

/// A single question put to the user.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    /// Whether an empty answer is refused.
    pub required: bool,
    pub validator: Option<Validator>,
}

/// Interactive prompt collaborator.
pub trait Prompter {
    /// Asks the user for a line of text. An empty string means no answer.
    fn input(&self, request: &PromptRequest<'_>) -> Result<String>;
}

/// Terminal prompter built on dialoguer.
///
/// Re-asks until the validator accepts the answer. Required questions refuse
/// an empty answer; optional ones accept it without running the validator.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, request: &PromptRequest<'_>) -> Result<String> {
        let prompt = if request.placeholder.is_empty() {
            request.label.to_string()
        } else {
            format!("{} ({})", request.label, request.placeholder)
        };
        let required = request.required;
        let validator = request.validator;

        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(!required)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                let input = input.trim();
                if input.is_empty() {
                    return if required {
                        Err("This value is required".to_string())
                    } else {
                        Ok(())
                    };
                }
                match validator {
                    Some(validate) => validate(input),
                    None => Ok(()),
                }
            })
            .interact_text()?;

        Ok(answer.trim().to_string())
    }
}

/// Prompter for fully flag-driven runs: every question goes unanswered.
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn input(&self, request: &PromptRequest<'_>) -> Result<String> {
        debug!("Not prompting for '{}' (non-interactive mode).", request.label);
        Ok(String::new())
    }
}
