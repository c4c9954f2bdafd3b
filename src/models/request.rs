//! Request data models.
//!
//! This module defines the core data structures for representing API requests
//! parsed from an apibook document, including the request method, per-request
//! sections (headers, query/path parameters, body, form), and metadata about
//! the request's location in the source document.

use serde::{Deserialize, Serialize};

/// HTTP request method.
///
/// Covers exactly the methods the document grammar accepts on a request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a valid method, `None` otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "HEAD" => Some(HttpMethod::HEAD),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a named section inside a request block.
///
/// Each section marker line (`Header:`, `Params:`, ...) opens exactly one of
/// these. `Global` belongs to the document rather than to any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// `Header:` - request headers, `key: value` lines
    Header,
    /// `Params:` - query parameters, `key=value&key=value` pairs
    Params,
    /// `Path:` - path parameters, same pair syntax as `Params:`
    Path,
    /// `Body:` - raw request body, typically JSON
    Body,
    /// `Form:` - raw form-encoded body
    Form,
    /// `Global:` - document-scoped variables, `key=value` lines
    Global,
}

impl SectionKind {
    /// Parses a section marker line (e.g. `"Header:"`) into its kind.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "Header:" => Some(SectionKind::Header),
            "Params:" => Some(SectionKind::Params),
            "Path:" => Some(SectionKind::Path),
            "Body:" => Some(SectionKind::Body),
            "Form:" => Some(SectionKind::Form),
            "Global:" => Some(SectionKind::Global),
            _ => None,
        }
    }
}

/// Represents a single named API request parsed from a document.
///
/// This structure contains everything needed to resolve variables against the
/// request and render it for transport, plus metadata about its location in
/// the source document.
///
/// Header and parameter collections preserve insertion order; setting an
/// existing key again updates its value in place rather than appending a
/// duplicate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Request name, taken from the `### <name>` marker line.
    pub name: String,

    /// HTTP method. `None` only while the parser is still accumulating the
    /// request; validated requests always carry a method.
    pub method: Option<HttpMethod>,

    /// Target URL. May contain `{{variable}}` placeholders that are resolved
    /// before rendering or transport.
    pub url: String,

    /// Request headers as ordered key-value pairs.
    pub headers: Vec<(String, String)>,

    /// Query parameters, appended to the URL at render time.
    pub query_params: Vec<(String, String)>,

    /// Path parameters. Parsed from the `Path:` section but never substituted
    /// into the URL by this crate; callers see them as raw pairs.
    pub path_params: Vec<(String, String)>,

    /// Raw request body text, joined from the `Body:` section lines.
    pub body: Option<String>,

    /// Raw form text, joined from the `Form:` section lines.
    pub form: Option<String>,

    /// 1-based line number of the `###` marker that defined this request.
    pub line_number: usize,
}

impl ApiRequest {
    /// Creates an empty request anchored at the given source line.
    pub fn new(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            method: None,
            url: String::new(),
            headers: Vec::new(),
            query_params: Vec::new(),
            path_params: Vec::new(),
            body: None,
            form: None,
            line_number,
        }
    }

    /// Sets a header, updating the value in place when the key already exists.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.headers, name.into(), value.into());
    }

    /// Gets a header value by exact key.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Gets the Content-Type header value if present (case-insensitive key).
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Checks if the request carries a non-empty body or form payload.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(|b| !b.is_empty())
            || self.form.as_ref().is_some_and(|f| !f.is_empty())
    }
}

/// Inserts or updates a key in an ordered pair list, preserving the position
/// of the first insertion.
pub(crate) fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    if let Some(entry) = pairs.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = value;
    } else {
        pairs.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::POST.as_str(), "POST");
        assert_eq!(HttpMethod::OPTIONS.as_str(), "OPTIONS");
    }

    #[test]
    fn test_http_method_parse() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::PATCH));
        assert_eq!(HttpMethod::parse("TRACE"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(format!("{}", HttpMethod::DELETE), "DELETE");
    }

    #[test]
    fn test_section_kind_from_marker() {
        assert_eq!(SectionKind::from_marker("Header:"), Some(SectionKind::Header));
        assert_eq!(SectionKind::from_marker("Global:"), Some(SectionKind::Global));
        assert_eq!(SectionKind::from_marker("Header"), None);
        assert_eq!(SectionKind::from_marker("header:"), None);
    }

    #[test]
    fn test_api_request_new() {
        let request = ApiRequest::new("Get User", 3);
        assert_eq!(request.name, "Get User");
        assert_eq!(request.method, None);
        assert!(request.url.is_empty());
        assert!(request.headers.is_empty());
        assert_eq!(request.line_number, 3);
        assert!(!request.has_body());
    }

    #[test]
    fn test_set_header_preserves_insertion_order() {
        let mut request = ApiRequest::new("test", 1);
        request.set_header("Accept", "application/json");
        request.set_header("Authorization", "Bearer abc");
        request.set_header("Accept", "text/plain");

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[0].0, "Accept");
        assert_eq!(request.headers[0].1, "text/plain");
        assert_eq!(request.headers[1].0, "Authorization");
    }

    #[test]
    fn test_content_type_case_insensitive() {
        let mut request = ApiRequest::new("test", 1);
        assert_eq!(request.content_type(), None);

        request.set_header("content-type", "text/plain");
        assert_eq!(request.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_has_body() {
        let mut request = ApiRequest::new("test", 1);
        assert!(!request.has_body());

        request.body = Some(String::new());
        assert!(!request.has_body());

        request.body = Some("{}".to_string());
        assert!(request.has_body());

        let mut form_request = ApiRequest::new("test", 1);
        form_request.form = Some("a=1".to_string());
        assert!(form_request.has_body());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut request = ApiRequest::new("Create User", 10);
        request.method = Some(HttpMethod::POST);
        request.url = "https://api.example.com/users".to_string();
        request.set_header("Content-Type", "application/json");
        request.body = Some(r#"{"name": "Alice"}"#.to_string());

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: ApiRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, request.name);
        assert_eq!(deserialized.method, request.method);
        assert_eq!(deserialized.url, request.url);
        assert_eq!(deserialized.headers, request.headers);
        assert_eq!(deserialized.body, request.body);
    }
}
