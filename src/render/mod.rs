//! Request rendering.
//!
//! Given a resolved request, this module produces the three canonical
//! descriptions consumers need: a curl command line, a raw wire-protocol
//! rendering, and a lightweight summary. It also hosts the size/duration
//! formatting helpers shared with presentation collaborators.

pub mod curl;
pub mod raw;

use crate::models::ApiRequest;
use crate::variables::resolve_for_display;
use curl::{generate_curl, payload_of};
use raw::generate_raw;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical renderings of a resolved request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Copy-pasteable curl command line.
    pub curl: String,

    /// Raw HTTP/1.1 rendering.
    pub raw_request: String,

    /// Descriptive summary for panels and listings.
    pub summary: RequestSummary,
}

/// Best-effort classification of a request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    /// Body text parses as JSON.
    Json,
    /// Only a form payload is present.
    Form,
    /// Body present but not valid JSON.
    Text,
    /// No payload.
    None,
}

impl BodyType {
    /// Returns the lowercase string form used in displays.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Json => "json",
            BodyType::Form => "form",
            BodyType::Text => "text",
            BodyType::None => "none",
        }
    }
}

/// Summary descriptor of a resolved request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSummary {
    /// HTTP method as text.
    pub method: String,

    /// Target URL (without appended query parameters).
    pub url: String,

    /// Whether any headers are set.
    pub has_headers: bool,

    /// Whether any query parameters are set.
    pub has_params: bool,

    /// Whether a non-empty body or form payload exists.
    pub has_body: bool,

    /// Payload classification. A body that happens to parse as JSON is always
    /// `Json`; this is a probe, not validation.
    pub body_type: BodyType,
}

/// Renders a resolved request into its canonical forms.
///
/// # Examples
///
/// ```
/// use apibook::models::{ApiRequest, HttpMethod};
/// use apibook::render::{render, BodyType};
///
/// let mut request = ApiRequest::new("Create User", 1);
/// request.method = Some(HttpMethod::POST);
/// request.url = "https://api.example.com/users".to_string();
/// request.body = Some(r#"{"name": "Alice"}"#.to_string());
///
/// let info = render(&request);
/// assert!(info.curl.starts_with("curl -X POST"));
/// assert!(info.raw_request.contains("Content-Type: application/json"));
/// assert_eq!(info.summary.body_type, BodyType::Json);
/// ```
pub fn render(request: &ApiRequest) -> RequestInfo {
    RequestInfo {
        curl: generate_curl(request),
        raw_request: generate_raw(request),
        summary: summarize(request),
    }
}

/// Convenience for presentation code: substitute variables under the display
/// policy, then render. Unresolved names appear bracketed instead of as raw
/// `{{...}}` tokens.
pub fn build_request_info(
    request: &ApiRequest,
    variables: &HashMap<String, String>,
) -> RequestInfo {
    render(&resolve_for_display(request, variables))
}

fn summarize(request: &ApiRequest) -> RequestSummary {
    let body = request.body.as_deref().filter(|b| !b.is_empty());
    let form = request.form.as_deref().filter(|f| !f.is_empty());

    let body_type = match (body, form) {
        (Some(body), _) => {
            if serde_json::from_str::<serde_json::Value>(body).is_ok() {
                BodyType::Json
            } else {
                BodyType::Text
            }
        }
        (None, Some(_)) => BodyType::Form,
        (None, None) => BodyType::None,
    };

    RequestSummary {
        method: request.method.map_or("GET", |m| m.as_str()).to_string(),
        url: request.url.clone(),
        has_headers: !request.headers.is_empty(),
        has_params: !request.query_params.is_empty(),
        has_body: payload_of(request).is_some(),
        body_type,
    }
}

/// Formats a byte count with base-1024 units, two decimals, trailing zeros
/// trimmed (`0 B`, `1 KB`, `1.5 KB`, `3.39 MB`).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Formats a millisecond duration for display: `420ms`, `1.25s`, `2m 5s`.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = ((ms % 60_000) as f64 / 1000.0).round() as u64;
        format!("{}m {}s", minutes, seconds)
    }
}
