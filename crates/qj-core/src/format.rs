//! Rendering helpers for query results.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Strings are returned as-is; anything else is pretty-printed JSON with
/// two-space indentation.
pub fn format_output(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Like [`format_output`] but single-line for non-strings.
pub fn format_compact(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Plain dotted traversal without filters or projections.
///
/// An empty path returns the document. Numeric steps index arrays.
pub fn get_json_path<'v>(document: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(document);
    }
    path.split('.').try_fold(document, |acc, key| match acc {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Replace each `{name}` in `template` with the formatted `object[name]`.
///
/// Placeholders naming a missing key are left untouched.
pub fn format_string(template: &str, object: &Value) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match object.get(name) {
                Some(v) => format_output(v),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
