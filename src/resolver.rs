//! Value resolution for the metadata fields.
//! Each field is taken from an explicit flag when one was given, otherwise it
//! is asked for through a `Prompter`, falling back to the field's default.

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::prompt::{PromptRequest, Prompter, Validator};

/// Describes one value kiln needs and how to ask for it.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Name of the command-line flag that can supply the value
    pub flag: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub default: Option<String>,
    pub required: bool,
    pub validator: Option<Validator>,
}

impl<'a> Field<'a> {
    pub fn new(flag: &'a str, label: &'a str) -> Self {
        Self { flag, label, placeholder: "", default: None, required: false, validator: None }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn default_value<S: Into<String>>(mut self, default: S) -> Self {
        let default = default.into();
        self.default = if default.is_empty() { None } else { Some(default) };
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Somewhere a field's value can come from.
pub trait ValueSource {
    /// Returns the value for `field`, or `None` when this source has nothing.
    fn fetch(&self, field: &Field<'_>) -> Result<Option<String>>;
}

/// Values passed explicitly on the command line, keyed by flag name.
#[derive(Debug, Default, Clone)]
pub struct FlagSource {
    values: IndexMap<String, String>,
}

impl FlagSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a flag value. `None` and empty strings count as absent.
    pub fn with<K: Into<String>>(mut self, flag: K, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.values.insert(flag.into(), value);
        }
        self
    }

    pub fn get(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }
}

impl ValueSource for FlagSource {
    fn fetch(&self, field: &Field<'_>) -> Result<Option<String>> {
        Ok(self.get(field.flag).map(str::to_string))
    }
}

/// Asks the user through a `Prompter`.
pub struct InteractiveSource<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> InteractiveSource<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }
}

impl ValueSource for InteractiveSource<'_> {
    fn fetch(&self, field: &Field<'_>) -> Result<Option<String>> {
        let request = PromptRequest {
            label: field.label,
            placeholder: field.placeholder,
            // A default satisfies a required field, so the prompt may be left blank.
            required: field.required && field.default.is_none(),
            validator: field.validator,
        };
        let answer = self.prompter.input(&request)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }
}

/// Chooses, per field, between explicit flags and the interactive fallback.
pub struct Resolver<'a> {
    flags: &'a dyn ValueSource,
    interactive: &'a dyn ValueSource,
}

impl<'a> Resolver<'a> {
    pub fn new(flags: &'a dyn ValueSource, interactive: &'a dyn ValueSource) -> Self {
        Self { flags, interactive }
    }

    /// Resolves a single field.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if the field is required and neither the flags,
    ///   the prompt nor the default produced a value
    pub fn resolve(&self, field: &Field<'_>) -> Result<String> {
        if let Some(value) = self.flags.fetch(field)? {
            debug!("Using --{} from the command line.", field.flag);
            return Ok(value);
        }

        if let Some(value) = self.interactive.fetch(field)? {
            return Ok(value);
        }

        match &field.default {
            Some(default) => {
                debug!("Using default '{}' for --{}.", default, field.flag);
                Ok(default.clone())
            }
            None if field.required => {
                Err(Error::invalid_input(field.flag, format!("{} is required", field.label)))
            }
            None => Ok(String::new()),
        }
    }
}
