//! Forgiving `$placeholder` substitution for display strings.
//!
//! Mirrors the `safe_substitute` contract: `$name` and `${name}` are replaced when a
//! value is known, `$$` collapses to a literal `$`, and anything else (unknown keys,
//! malformed braces, a trailing `$`) is left in the output untouched. Substitution
//! never fails.

use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

/// Values available to a template, keyed by placeholder name.
pub type TemplateValues<'a> = HashMap<&'a str, String>;

/// `$$`, `$name` or `${name}`. A `$` matching none of these is not matched at all.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Substitutes known placeholders, leaving unknown ones verbatim.
///
/// # Arguments
/// - `template` - Text containing `$name`, `${name}` or `$$` sequences
/// - `values` - Replacement values by placeholder name
///
/// # Returns
/// - `String` - The substituted text
pub fn safe_substitute(template: &str, values: &TemplateValues) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }

            caps.get(2)
                .or_else(|| caps.get(3))
                .and_then(|name| values.get(name.as_str()))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
