//! Token substitution for site-wide variables.
//!
//! Content documents reference site-wide values with `{namespace.key}`
//! tokens (e.g. `{website.name}`). Substitution replaces every occurrence
//! of a known token and leaves unknown tokens verbatim. Because variable
//! values are validated to contain no token syntax, substitution is
//! idempotent: running it over its own output changes nothing.

use anyhow::{bail, Result};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

// Token syntax: {namespace.key} with at least one dot.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*(?:\.[A-Za-z][A-Za-z0-9_]*)+)\}").unwrap()
    })
}

/// The fixed mapping from token name to replacement value.
///
/// Built once at startup from configuration. Construction rejects values
/// that themselves contain token syntax; without that check a replacement
/// could re-introduce tokens and double substitution would no longer be a
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct SiteVariables {
    values: HashMap<String, String>,
}

impl SiteVariables {
    /// Build the variable set from `(token, value)` pairs.
    ///
    /// # Returns
    /// * `Err` if any value contains `{namespace.key}` token syntax
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (token, value) in pairs {
            let token = token.into();
            let value = value.into();
            if token_regex().is_match(&value) {
                bail!(
                    "Variable '{}' has a value containing token syntax: '{}'",
                    token,
                    value
                );
            }
            values.insert(token, value);
        }
        Ok(Self { values })
    }

    /// The site's standard variable set, taken from configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::new([
            ("website.name", config.website_name.as_str()),
            ("website.slogan", config.website_slogan.as_str()),
        ])
    }

    /// Look up a replacement value by token name (without braces).
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Replace every known `{namespace.key}` token in `text`.
///
/// Unknown tokens are left verbatim; the surrounding text is never
/// dropped. Empty input yields an empty string.
pub fn substitute(text: &str, variables: &SiteVariables) -> String {
    if text.is_empty() {
        return String::new();
    }

    token_regex()
        .replace_all(text, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Substitute over an optional field; absence yields an empty string.
pub fn substitute_opt(text: Option<&str>, variables: &SiteVariables) -> String {
    match text {
        Some(text) => substitute(text, variables),
        None => String::new(),
    }
}

/// Apply substitution to every string in a JSON document, in place.
///
/// Used when a bundle is loaded, so resolved content is already normalized
/// and resolution itself stays a pure lookup.
pub(crate) fn substitute_value(value: &mut serde_json::Value, variables: &SiteVariables) {
    match value {
        serde_json::Value::String(text) => {
            if text.contains('{') {
                *text = substitute(text, variables);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                substitute_value(item, variables);
            }
        }
        serde_json::Value::Object(fields) => {
            for (_, field) in fields.iter_mut() {
                substitute_value(field, variables);
            }
        }
        _ => {}
    }
}
