//! curl command generation.
//!
//! Renders a resolved request as a copy-pasteable `curl` invocation with the
//! query string appended, one `-H` flag per header in insertion order, and an
//! escaped `-d` payload when a body or form is present.

use crate::models::ApiRequest;
use url::form_urlencoded;

/// Appends URL-encoded query parameters to a URL, honoring an existing `?`.
pub(crate) fn append_query(url: &str, query_params: &[(String, String)]) -> String {
    if query_params.is_empty() {
        return url.to_string();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query_params {
        serializer.append_pair(key, value);
    }
    let query = serializer.finish();
    if query.is_empty() {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}

/// Generates a curl command line from a resolved request.
///
/// Headers appear in insertion order. When both body and form are present the
/// body wins. Double quotes and newlines in the payload are escaped so the
/// command stays a valid single shell word per flag.
///
/// # Examples
///
/// ```
/// use apibook::models::{ApiRequest, HttpMethod};
/// use apibook::render::curl::generate_curl;
///
/// let mut request = ApiRequest::new("Get User", 1);
/// request.method = Some(HttpMethod::GET);
/// request.url = "https://api.example.com/users/42".to_string();
///
/// let curl = generate_curl(&request);
/// assert!(curl.starts_with("curl -X GET \"https://api.example.com/users/42\""));
/// ```
pub fn generate_curl(request: &ApiRequest) -> String {
    let method = request.method.map_or("GET", |m| m.as_str());
    let url = append_query(&request.url, &request.query_params);
    let mut curl = format!("curl -X {} \"{}\"", method, url);

    for (key, value) in &request.headers {
        curl.push_str(&format!(" \\\n  -H \"{}: {}\"", key, value));
    }

    if let Some(payload) = payload_of(request) {
        curl.push_str(&format!(" \\\n  -d \"{}\"", escape_payload(payload)));
    }

    curl
}

/// The payload a request would send: body when non-empty, else form.
pub(crate) fn payload_of(request: &ApiRequest) -> Option<&str> {
    request
        .body
        .as_deref()
        .filter(|b| !b.is_empty())
        .or_else(|| request.form.as_deref().filter(|f| !f.is_empty()))
}

fn escape_payload(text: &str) -> String {
    text.replace('"', "\\\"").replace('\n', "\\n")
}
