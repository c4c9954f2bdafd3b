//! End-to-end integration tests for apibook.
//!
//! These tests exercise the full pipeline: raw document text through the
//! parser, variable resolution against layered sources, and rendering of the
//! resolved request.

use apibook::{
    build_request_info, extract_placeholders, find_request_at_line, parse, prepare_request,
    render, resolve_request, BodyType, ParseError, PromptVariables, VariableSession,
};
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn parse_resolve_render_round_trip() {
    let text = "### Get User\nGET https://api.example.com/users/{{id}}\nHeader:\n  Authorization: Bearer {{token}}\n";

    let document = parse(text).unwrap();
    assert_eq!(document.requests.len(), 1);

    let request = &document.requests[0];
    assert_eq!(request.name, "Get User");
    assert_eq!(request.method.unwrap().as_str(), "GET");
    assert_eq!(request.url, "https://api.example.com/users/{{id}}");
    assert_eq!(
        request.headers,
        vec![("Authorization".to_string(), "Bearer {{token}}".to_string())]
    );

    let placeholders = extract_placeholders(request);
    let mut names: Vec<&str> = placeholders.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["id", "token"]);

    let resolved = resolve_request(request, &vars(&[("id", "42"), ("token", "abc")]));
    assert_eq!(resolved.url, "https://api.example.com/users/42");
    assert_eq!(resolved.headers[0].1, "Bearer abc");

    let info = render(&resolved);
    assert!(info
        .curl
        .starts_with("curl -X GET \"https://api.example.com/users/42\""));
    assert!(info.curl.contains("-H \"Authorization: Bearer abc\""));
    assert!(info
        .raw_request
        .starts_with("GET https://api.example.com/users/42 HTTP/1.1"));
    assert!(info.raw_request.contains("Host: api.example.com"));
}

#[test]
fn full_document_with_globals_sections_and_recorded_response() {
    let text = "\
# Service API collection

Global:
  host=api.example.com
  version=v1

### List Posts
GET https://{{host}}/{{version}}/posts
Params:
  limit=10&offset={{offset}}

#### Response 200 OK
[{\"id\": 1, \"title\": \"{{ghost}}\"}]
####

### Create Post
POST https://{{host}}/{{version}}/posts
Header:
  Authorization: Bearer {{token}}
Body:
{
  \"title\": \"hello\",
  \"tags\": [\"a\"]
}
";
    let document = parse(text).unwrap();
    assert_eq!(document.requests.len(), 2);
    assert_eq!(document.global_variables.len(), 2);

    // Discovery covers skipped response blocks too.
    assert!(document.discovered_placeholders.contains_key("ghost"));
    assert!(document.discovered_placeholders.contains_key("offset"));

    let list = &document.requests[0];
    assert_eq!(list.query_params.len(), 2);
    assert_eq!(list.query_params[1].1, "{{offset}}");

    let create = &document.requests[1];
    let body = create.body.as_deref().unwrap();
    assert!(body.contains("\"tags\": [\"a\"]"));

    // Resolve against globals only; the unresolved token stays literal.
    let resolved = resolve_request(create, &document.global_variables);
    assert_eq!(resolved.url, "https://api.example.com/v1/posts");
    assert_eq!(resolved.headers[0].1, "Bearer {{token}}");

    let info = render(&resolved);
    assert_eq!(info.summary.body_type, BodyType::Json);
    assert!(info.raw_request.contains("Content-Type: application/json"));
    assert!(info
        .raw_request
        .contains(&format!("Content-Length: {}", body.len())));
}

#[test]
fn broken_document_yields_only_errors() {
    let text = "\
### Fine
GET https://example.com

### No Method Here
Header:
  Accept: application/json
";
    let errors = parse(text).unwrap_err();
    assert_eq!(
        errors,
        vec![
            ParseError::MissingMethod { line: 4 },
            ParseError::MissingUrl { line: 4 },
        ]
    );
}

#[test]
fn cursor_mapping_follows_defining_lines() {
    let text = "\
Global:
  host=example.com

### First
GET https://{{host}}/1

### Second
GET https://{{host}}/2
";
    let document = parse(text).unwrap();
    assert!(find_request_at_line(&document.requests, 2).is_none());
    assert_eq!(find_request_at_line(&document.requests, 5).unwrap().name, "First");
    assert_eq!(find_request_at_line(&document.requests, 7).unwrap().name, "Second");
}

#[test]
fn display_info_never_shows_brace_syntax() {
    let text = "### Get\nGET https://api.example.com/users/{{id}}\nHeader:\n  Authorization: Bearer {{token}}\n";
    let document = parse(text).unwrap();

    let info = build_request_info(&document.requests[0], &vars(&[("id", "42")]));
    assert!(info.curl.contains("/users/42"));
    assert!(info.curl.contains("[token]"));
    assert!(!info.curl.contains("{{"));
    assert!(!info.raw_request.contains("{{"));
}

struct MapPrompt(HashMap<String, String>);

impl PromptVariables for MapPrompt {
    fn prompt(&self, name: &str, _default: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

#[test]
fn session_layering_across_two_sends() {
    let text = "\
Global:
  host=api.example.com

### Get User
GET https://{{host}}/users/{{id}}
";
    let document = parse(text).unwrap();
    let request = &document.requests[0];
    let mut session = VariableSession::new();

    // First preparation prompts for the id and remembers it.
    let prompter = MapPrompt(vars(&[("id", "42")]));
    let first = prepare_request(request, &document.global_variables, &mut session, &prompter)
        .unwrap();
    assert_eq!(first.url, "https://api.example.com/users/42");

    // Second preparation is satisfied by the session alone.
    let cancels_everything = MapPrompt(HashMap::new());
    let second = prepare_request(
        request,
        &document.global_variables,
        &mut session,
        &cancels_everything,
    )
    .unwrap();
    assert_eq!(second.url, "https://api.example.com/users/42");

    // The parsed model is reusable with a different variable set.
    let other = resolve_request(request, &vars(&[("host", "other.example.com"), ("id", "7")]));
    assert_eq!(other.url, "https://other.example.com/users/7");
}

#[test]
fn query_params_render_into_both_forms_but_stay_raw_in_model() {
    let text = "\
### Search
GET https://example.com/search
Params:
  q=rust&tag={{tag}}
";
    let document = parse(text).unwrap();
    let resolved = resolve_request(&document.requests[0], &vars(&[("tag", "web")]));

    // Params are rendered as parsed; their placeholders are not substituted.
    assert_eq!(resolved.query_params[1].1, "{{tag}}");
    let info = render(&resolved);
    assert!(info.curl.contains("q=rust"));
    assert!(info.curl.contains("tag=%7B%7Btag%7D%7D"));
}
