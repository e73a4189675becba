//! Identifier normalization.
//! Derives the slug, studly (PascalCase) and human readable forms of the
//! package and vendor names. Every function here is pure.

use cruet::Inflector;

use crate::constants::PROVIDER_SUFFIX;

/// Lowercases `value` and collapses every run of whitespace or ASCII
/// punctuation into a single hyphen. Leading and trailing hyphens are
/// stripped and non-ASCII characters are dropped.
///
/// # Example
/// ```
/// assert_eq!(kiln::naming::slugify("My Cool  Lib!"), "my-cool-lib");
/// ```
pub fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch.is_ascii_punctuation() {
            pending_dash = true;
        }
    }

    out
}

/// Splits `value` on hyphens and spaces, capitalizes the first letter of each
/// non-empty segment and joins them without a separator.
///
/// # Example
/// ```
/// assert_eq!(kiln::naming::studly("my-cool-lib"), "MyCoolLib");
/// ```
pub fn studly(value: &str) -> String {
    value
        .split(['-', ' '])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Title case with words separated by spaces, for human readable names.
pub fn clean_name(value: &str) -> String {
    value.to_title_case()
}

/// Normalizes a provider class name so it ends with `ServiceProvider`
/// exactly once, whatever the caller passed in.
///
/// Anything other than ASCII letters and digits acts as a word break, so the
/// result is always a plain identifier that is safe to use as a file name.
pub fn provider_class_name(value: &str) -> String {
    let words: String = value
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let mut name = studly(&words);
    while name.ends_with(PROVIDER_SUFFIX) {
        name.truncate(name.len() - PROVIDER_SUFFIX.len());
    }
    name.push_str(PROVIDER_SUFFIX);
    name
}

/// First whitespace separated word of an author name.
pub fn first_name(author: &str) -> &str {
    author.split_whitespace().next().unwrap_or_default()
}
