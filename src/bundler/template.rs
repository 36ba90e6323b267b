//! Placeholder substitution for installer scripts and bundle manifests.
//!
//! Templates use `{{Name}}` placeholders. Only names present in the token map
//! are replaced; anything else (unknown placeholders, Inno Setup constants such
//! as `{app}`, preprocessor defines such as `{#AppName}`) is copied through
//! unchanged.

use regex::{Captures, Regex};
use std::{collections::BTreeMap, sync::LazyLock};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Token name to replacement text.
#[derive(Clone, Debug, Default)]
pub struct TokenMap {
    tokens: BTreeMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a token value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    /// Sets a token from an optional value; `None` renders as an empty string.
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<&str>) -> &mut Self {
        self.insert(name, value.unwrap_or_default())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Result of rendering a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered text.
    pub text: String,
    /// Placeholder names that had no token, sorted and deduplicated.
    pub unresolved: Vec<String>,
}

/// Substitutes every recognized placeholder in a single pass.
///
/// Replacement text is inserted verbatim and never re-scanned, so a value that
/// itself looks like a placeholder stays as-is.
pub fn render(template: &str, tokens: &TokenMap) -> Rendered {
    let mut unresolved = Vec::new();

    let text = PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match tokens.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => {
                unresolved.push(caps[1].to_string());
                caps[0].to_string()
            }
        })
        .into_owned();

    unresolved.sort();
    unresolved.dedup();

    Rendered { text, unresolved }
}

/// Renders a template and warns about placeholders left in place.
pub fn render_logged(kind: &str, template: &str, tokens: &TokenMap) -> String {
    let rendered = render(template, tokens);
    if !rendered.unresolved.is_empty() {
        log::warn!(
            "{} template has unrecognized placeholders left as-is: {}",
            kind,
            rendered.unresolved.join(", ")
        );
    }
    rendered.text
}
