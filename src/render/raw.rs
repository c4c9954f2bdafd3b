//! Raw HTTP/1.1 rendering.
//!
//! Renders a resolved request the way it would appear on the wire: request
//! line, derived `Host:` header, original headers, synthesized
//! `Content-Type`/`Content-Length` when a payload exists without an explicit
//! content type, blank line, payload.

use super::curl::{append_query, payload_of};
use crate::models::ApiRequest;
use url::Url;

/// Generates the raw wire-protocol form of a resolved request.
///
/// The `Host:` line is derived by parsing the request URL and is silently
/// omitted when the URL does not parse; rendering never fails.
pub fn generate_raw(request: &ApiRequest) -> String {
    let method = request.method.map_or("GET", |m| m.as_str());
    let url = append_query(&request.url, &request.query_params);
    let mut raw = format!("{} {} HTTP/1.1\n", method, url);

    if let Some(host) = derive_host(&request.url) {
        raw.push_str(&format!("Host: {}\n", host));
    }

    for (key, value) in &request.headers {
        raw.push_str(&format!("{}: {}\n", key, value));
    }

    if let Some(payload) = payload_of(request) {
        if request.content_type().is_none() {
            let synthesized = if request.body.as_deref().is_some_and(|b| !b.is_empty()) {
                "application/json"
            } else {
                "application/x-www-form-urlencoded"
            };
            raw.push_str(&format!("Content-Type: {}\n", synthesized));
        }
        raw.push_str(&format!("Content-Length: {}\n", payload.len()));
        raw.push('\n');
        raw.push_str(payload);
    } else {
        raw.push('\n');
    }

    raw
}

/// Extracts `host[:port]` from a URL, omitting default ports.
fn derive_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
