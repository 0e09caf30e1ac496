use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use thiserror::Error;

use super::cleaner::strip_code_fences;

/// Placeholder token: literal `$<Name>` inside a template.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$<([^>]+)>").expect("placeholder pattern is valid"));

/// Recoverable rendering failures, surfaced as a status string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RenderError {
    #[error("invalid regular expression: {0}")]
    InvalidPattern(String),
    #[error("the pattern matched no data; check the data or the pattern")]
    NoMatch,
}

/// Result of one render pass.
///
/// `variables` only contains named groups that actually participated in the
/// match; optional groups that did not match are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    pub html: String,
    pub variables: BTreeMap<String, String>,
    pub error: Option<RenderError>,
}

impl RenderOutcome {
    fn passthrough(template: &str, error: RenderError) -> Self {
        Self {
            html: template.to_string(),
            variables: BTreeMap::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Compiles `pattern`, matches it against `char_data` and interpolates the
/// captured named groups into `html_template`.
///
/// A pattern that fails to compile, or compiles but matches nothing, returns
/// the original template verbatim together with the corresponding error flag.
/// The function has no side effects and is idempotent for fixed inputs.
pub fn render(pattern: &str, char_data: &str, html_template: &str) -> RenderOutcome {
    let cleaned = pattern.trim();

    let regex = match Regex::new(cleaned) {
        Ok(regex) => regex,
        Err(e) => {
            return RenderOutcome::passthrough(
                html_template,
                RenderError::InvalidPattern(e.to_string()),
            )
        }
    };

    let captures = match regex.captures(char_data) {
        Some(captures) => captures,
        None => return RenderOutcome::passthrough(html_template, RenderError::NoMatch),
    };

    let mut variables = BTreeMap::new();
    for name in regex.capture_names().flatten() {
        if let Some(found) = captures.name(name) {
            variables.insert(name.to_string(), found.as_str().to_string());
        }
    }

    // Templates pasted from an LLM answer often arrive fenced; strip the
    // fences before substituting so the preview is raw HTML.
    let template = strip_code_fences(html_template);
    let html = substitute(&template, &variables);

    RenderOutcome {
        html,
        variables,
        error: None,
    }
}

/// Single left-to-right pass over `$<Key>` tokens.
///
/// Tokens whose key exists in `variables` are replaced with the captured
/// value; unknown tokens are left byte-identical.
pub fn substitute(template: &str, variables: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            variables
                .get(key)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Distinct placeholder keys in template order, first occurrence wins.
pub fn placeholder_keys(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let key = caps[1].to_string();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}
