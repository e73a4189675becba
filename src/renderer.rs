//! Placeholder substitution for skeleton files.
//! Replaces literal tokens such as `{{package_name}}` with resolved values.
//! Substitution is a single left-to-right pass: text produced by a
//! replacement is never scanned again.
use indexmap::IndexMap;
use log::debug;
use regex::{Captures, Regex};
use std::path::Path;

use crate::error::Result;
use crate::fs::FileSystem;

/// Ordered mapping from literal token to replacement value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenMap {
    entries: IndexMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a token. Empty tokens are ignored since they would
    /// match everywhere.
    pub fn with<T: Into<String>, V: Into<String>>(mut self, token: T, value: V) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.entries.insert(token, value.into());
        }
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One alternation over every token. Longer tokens come first so the
    /// leftmost match at a position is also the longest.
    fn pattern(&self) -> Result<Regex> {
        let mut tokens: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = tokens.into_iter().map(regex::escape).collect::<Vec<_>>().join("|");
        Ok(Regex::new(&alternation)?)
    }
}

/// Result of substituting one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    pub replacements: usize,
}

/// Replaces every token occurrence in `content`.
///
/// # Example
/// ```
/// use kiln::renderer::{render, TokenMap};
///
/// let tokens = TokenMap::new().with("{{name}}", "kiln");
/// let rendered = render("Hello {{name}}!", &tokens).unwrap();
/// assert_eq!(rendered.content, "Hello kiln!");
/// assert_eq!(rendered.replacements, 1);
/// ```
///
/// # Errors
/// * `Error::TokenError` if the token alternation cannot be compiled
pub fn render(content: &str, tokens: &TokenMap) -> Result<Rendered> {
    if tokens.is_empty() {
        return Ok(Rendered { content: content.to_string(), replacements: 0 });
    }

    let pattern = tokens.pattern()?;
    let mut replacements = 0;
    let content = pattern
        .replace_all(content, |caps: &Captures<'_>| {
            replacements += 1;
            tokens.get(&caps[0]).unwrap_or(&caps[0]).to_string()
        })
        .into_owned();

    Ok(Rendered { content, replacements })
}

/// Rewrites the file at `path` in place, returning how many tokens were
/// replaced.
///
/// # Errors
/// * `Error::FileError` if the file cannot be read or written
pub fn apply(fs: &dyn FileSystem, path: &Path, tokens: &TokenMap) -> Result<usize> {
    let content = fs.read_to_string(path)?;
    let rendered = render(&content, tokens)?;
    fs.write(path, &rendered.content)?;
    debug!("Replaced {} token(s) in '{}'.", rendered.replacements, path.display());
    Ok(rendered.replacements)
}
