//! Placeholder scanning and substitution.
//!
//! This module implements the `{{name}}` placeholder layer: scanning text for
//! placeholder tokens, extracting the set of names a request depends on, and
//! substituting values into a derived copy of a request.
//!
//! Two substitution policies exist on purpose, as separate named functions
//! rather than one function with a mode flag:
//!
//! - [`substitute`] is the transport policy: an unresolved placeholder stays
//!   a literal `{{name}}` so it is visibly wrong on the wire instead of
//!   silently blank.
//! - [`substitute_for_display`] is the human-readable policy: an unresolved
//!   placeholder renders as `[name]` so displayed text never contains raw
//!   brace syntax.

use crate::models::ApiRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Cached regex pattern for matching `{{variableName}}` with optional
/// whitespace inside the braces. Compiled once and reused.
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("Failed to compile placeholder regex"));

/// Scans text for placeholders and records each distinct trimmed name into
/// the map with an empty value.
pub(crate) fn scan_into(text: &str, names: &mut HashMap<String, String>) {
    for cap in PLACEHOLDER_REGEX.captures_iter(text) {
        let name = cap[1].trim();
        if !name.is_empty() {
            names.entry(name.to_string()).or_default();
        }
    }
}

/// Scans a whole text for `{{name}}` tokens.
///
/// # Returns
///
/// Every distinct trimmed placeholder name mapped to an empty value.
pub fn scan_placeholders(text: &str) -> HashMap<String, String> {
    let mut names = HashMap::new();
    scan_into(text, &mut names);
    names
}

/// Extracts every placeholder name a request depends on.
///
/// Scans the URL, every header value, the body, the form, and every query and
/// path parameter value. The result defines exactly which names a caller must
/// supply values for before substitution.
///
/// # Examples
///
/// ```
/// use apibook::models::ApiRequest;
/// use apibook::variables::extract_placeholders;
///
/// let mut request = ApiRequest::new("Get User", 1);
/// request.url = "https://api.example.com/users/{{id}}".to_string();
/// request.set_header("Authorization", "Bearer {{ token }}");
///
/// let names = extract_placeholders(&request);
/// assert!(names.contains_key("id"));
/// assert!(names.contains_key("token"));
/// ```
pub fn extract_placeholders(request: &ApiRequest) -> HashMap<String, String> {
    let mut names = HashMap::new();

    scan_into(&request.url, &mut names);
    for (_, value) in &request.headers {
        scan_into(value, &mut names);
    }
    if let Some(body) = &request.body {
        scan_into(body, &mut names);
    }
    if let Some(form) = &request.form {
        scan_into(form, &mut names);
    }
    for (_, value) in &request.query_params {
        scan_into(value, &mut names);
    }
    for (_, value) in &request.path_params {
        scan_into(value, &mut names);
    }

    names
}

/// Replaces each placeholder token via the given policy. The captured name is
/// trimmed before it reaches the policy, so `{{ foo }}` and `{{foo}}` are the
/// same lookup key.
fn replace_each(text: &str, mut policy: impl FnMut(&str, &str) -> String) -> String {
    // Fast path: no placeholder markers at all.
    if !text.contains("{{") {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for cap in PLACEHOLDER_REGEX.captures_iter(text) {
        let token = cap.get(0).expect("capture 0 always present");
        let name = cap[1].trim();
        result.push_str(&text[last_end..token.start()]);
        result.push_str(&policy(name, token.as_str()));
        last_end = token.end();
    }
    result.push_str(&text[last_end..]);
    result
}

/// Substitutes placeholders for transport use.
///
/// A token is replaced only when the variable is present AND non-empty;
/// otherwise the literal `{{name}}` token is preserved.
pub fn substitute(text: &str, variables: &HashMap<String, String>) -> String {
    replace_each(text, |name, token| {
        match variables.get(name) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => token.to_string(),
        }
    })
}

/// Substitutes placeholders for human-readable display.
///
/// An unresolved or empty variable renders as `[name]`, never as raw
/// `{{...}}` syntax.
pub fn substitute_for_display(text: &str, variables: &HashMap<String, String>) -> String {
    replace_each(text, |name, _| {
        match variables.get(name) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => format!("[{}]", name),
        }
    })
}

/// Returns a derived copy of the request with the URL, every header value,
/// the body, and the form substituted under the transport policy. The parsed
/// original is left untouched so it can be resolved again with a different
/// variable set.
///
/// Query and path parameters are deliberately NOT substituted; they stay raw
/// pairs on the derived copy.
pub fn resolve_request(request: &ApiRequest, variables: &HashMap<String, String>) -> ApiRequest {
    resolve_with(request, variables, substitute)
}

/// Display-policy twin of [`resolve_request`], used when building
/// human-facing request descriptions.
pub fn resolve_for_display(
    request: &ApiRequest,
    variables: &HashMap<String, String>,
) -> ApiRequest {
    resolve_with(request, variables, substitute_for_display)
}

fn resolve_with(
    request: &ApiRequest,
    variables: &HashMap<String, String>,
    substitute_fn: fn(&str, &HashMap<String, String>) -> String,
) -> ApiRequest {
    let mut resolved = request.clone();

    resolved.url = substitute_fn(&request.url, variables);
    for (_, value) in resolved.headers.iter_mut() {
        *value = substitute_fn(value, variables);
    }
    if let Some(body) = &request.body {
        resolved.body = Some(substitute_fn(body, variables));
    }
    if let Some(form) = &request.form {
        resolved.form = Some(substitute_fn(form, variables));
    }

    resolved
}
