//! Document parser.
//!
//! This module turns the raw text of an apibook document into a structured
//! [`ApiDocument`]. A document holds one or more named requests (`### <name>`
//! markers), optional `Global:` variable sections, per-request sections
//! (`Header:`, `Params:`, `Path:`, `Body:`, `Form:`), and inert recorded
//! response blocks (`#### Response` ... `####`) which are skipped entirely.
//!
//! Parsing is a single pass over lines driven by an explicit state machine.
//! Rule order matters and is fixed: comments, response blocks, request
//! markers, method lines, section markers, section content. Structural errors
//! are collected rather than thrown; a document with any error yields no
//! requests at all.

pub mod error;

use crate::models::request::set_pair;
use crate::models::{ApiDocument, ApiRequest, HttpMethod, SectionKind};
use crate::variables::substitution::scan_placeholders;
use error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Cached pattern for a `METHOD url` request line.
static METHOD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS)\s+(.+)$")
        .expect("Failed to compile method line regex")
});

/// Parser state. One state is active at any line; rule priority within a
/// state is fixed by `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No request or section open yet.
    Idle,
    /// A request is open, no section is.
    InRequest,
    /// A request-scoped section is accumulating content.
    InSection(SectionKind),
    /// A `Global:` section is accumulating content (a request may also be
    /// open; global content still merges into the document).
    InGlobalSection,
    /// Inside a recorded response block; lines are consumed verbatim.
    SkippingResponse,
}

struct Parser {
    state: State,
    /// State to restore when a response block closes.
    resume: State,
    current_request: Option<ApiRequest>,
    section_content: Vec<String>,
    document: ApiDocument,
    errors: Vec<ParseError>,
}

/// Parses the content of an apibook document.
///
/// All-or-nothing: if any structural error is found, the error list is
/// returned and no requests are produced.
///
/// # Arguments
///
/// * `content` - The full document text
///
/// # Returns
///
/// A `Result` containing the parsed [`ApiDocument`] on success, or every
/// collected [`ParseError`] on failure.
///
/// # Examples
///
/// ```
/// use apibook::parser::parse;
///
/// let content = "### Get User\nGET https://api.example.com/users/{{id}}\n";
/// let document = parse(content).unwrap();
/// assert_eq!(document.requests.len(), 1);
/// assert_eq!(document.requests[0].name, "Get User");
/// ```
pub fn parse(content: &str) -> Result<ApiDocument, Vec<ParseError>> {
    let mut parser = Parser {
        state: State::Idle,
        resume: State::Idle,
        current_request: None,
        section_content: Vec::new(),
        document: ApiDocument::new(),
        errors: Vec::new(),
    };

    for (idx, raw_line) in content.lines().enumerate() {
        parser.step(idx + 1, raw_line);
    }
    parser.finish(content)
}

impl Parser {
    /// Processes one source line. Rules are tried in order; the first match
    /// wins.
    fn step(&mut self, line_number: usize, raw_line: &str) {
        let trimmed = raw_line.trim();

        // Response blocks consume everything until their closing marker.
        if self.state == State::SkippingResponse {
            if trimmed == "####" {
                self.state = self.resume;
            }
            return;
        }

        // Blank lines and comments (but not ### request markers).
        if trimmed.is_empty() || (trimmed.starts_with('#') && !trimmed.starts_with("###")) {
            return;
        }

        // Recorded response block start.
        if trimmed.starts_with("#### Response") {
            self.resume = self.state;
            self.state = State::SkippingResponse;
            return;
        }

        // Request marker: finalize whatever is open, then start fresh.
        if trimmed.starts_with("###") {
            self.finish_request();
            let name = trimmed[3..].trim().to_string();
            self.current_request = Some(ApiRequest::new(name, line_number));
            self.state = State::InRequest;
            return;
        }

        // Method and URL line. Does not close an open section.
        if let Some(caps) = METHOD_LINE.captures(trimmed) {
            match self.current_request.as_mut() {
                Some(request) => {
                    request.method = HttpMethod::parse(&caps[1]);
                    request.url = caps[2].trim().to_string();
                }
                None => {
                    self.errors
                        .push(ParseError::MethodWithoutRequest { line: line_number });
                }
            }
            return;
        }

        // Section marker: close the previous section, open the new one.
        if let Some(kind) = SectionKind::from_marker(trimmed) {
            self.close_section();
            self.state = if kind == SectionKind::Global {
                State::InGlobalSection
            } else {
                State::InSection(kind)
            };
            return;
        }

        // Body/Form content: brace lines and continuation lines are kept
        // verbatim so multi-line JSON survives without a brace-balance parser.
        if let State::InSection(SectionKind::Body) | State::InSection(SectionKind::Form) =
            self.state
        {
            if trimmed.starts_with('{')
                || trimmed.starts_with('}')
                || (!self.section_content.is_empty() && !trimmed.starts_with("###"))
            {
                self.section_content.push(raw_line.to_string());
                return;
            }
        }

        // Indented section content; global content may be un-indented.
        match self.state {
            State::InGlobalSection => {
                self.section_content.push(trimmed.to_string());
            }
            State::InSection(_) if raw_line.starts_with("  ") => {
                self.section_content.push(raw_line[2..].to_string());
            }
            // Anything else is silently ignored.
            _ => {}
        }
    }

    /// Finalizes everything still open at end of document and produces the
    /// parse result.
    fn finish(mut self, content: &str) -> Result<ApiDocument, Vec<ParseError>> {
        // An unterminated response block simply runs to end of document.
        if self.state == State::SkippingResponse {
            self.state = self.resume;
        }
        self.finish_request();

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        self.document.discovered_placeholders = scan_placeholders(content);
        Ok(self.document)
    }

    /// Closes the open section (if any), dispatching its accumulated content
    /// by kind: `Global` merges into the document's variables, everything
    /// else lands on the open request. Content with no open request to
    /// receive it is dropped.
    fn close_section(&mut self) {
        let content = std::mem::take(&mut self.section_content);

        let kind = match self.state {
            State::InSection(kind) => kind,
            State::InGlobalSection => SectionKind::Global,
            _ => return,
        };
        self.state = if self.current_request.is_some() {
            State::InRequest
        } else {
            State::Idle
        };

        if content.is_empty() {
            return;
        }

        if kind == SectionKind::Global {
            parse_global_variables(&content, &mut self.document.global_variables);
            return;
        }

        let Some(request) = self.current_request.as_mut() else {
            return;
        };
        match kind {
            SectionKind::Header => request.headers = parse_header_lines(&content),
            SectionKind::Params => request.query_params = parse_param_pairs(&content),
            SectionKind::Path => request.path_params = parse_param_pairs(&content),
            SectionKind::Body => request.body = Some(content.join("\n")),
            SectionKind::Form => request.form = Some(content.join("\n")),
            SectionKind::Global => unreachable!("handled above"),
        }
    }

    /// Closes the open section, then validates the open request and either
    /// appends it to the document or records its errors.
    fn finish_request(&mut self) {
        self.close_section();
        let Some(request) = self.current_request.take() else {
            self.state = State::Idle;
            return;
        };
        match validate_request(request) {
            Ok(request) => self.document.requests.push(request),
            Err(errors) => self.errors.extend(errors),
        }
        self.state = State::Idle;
    }
}

/// Validates a finalized request. A single request can contribute up to three
/// errors, all reported at its defining `###` marker line.
fn validate_request(request: ApiRequest) -> Result<ApiRequest, Vec<ParseError>> {
    let line = request.line_number;
    let mut errors = Vec::new();

    if request.name.is_empty() {
        errors.push(ParseError::MissingName { line });
    }
    if request.method.is_none() {
        errors.push(ParseError::MissingMethod { line });
    }
    if request.url.is_empty() {
        errors.push(ParseError::MissingUrl { line });
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(errors)
    }
}

/// Interprets `key: value` lines (first colon wins). Lines without a colon
/// after a non-empty key are skipped.
fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(colon) = trimmed.find(':') {
            let key = trimmed[..colon].trim();
            if !key.is_empty() {
                let value = trimmed[colon + 1..].trim();
                set_pair(&mut headers, key.to_string(), value.to_string());
            }
        }
    }
    headers
}

/// Interprets `key=value&key=value` pair syntax across the joined content.
/// Tokens without an `=` are dropped.
fn parse_param_pairs(lines: &[String]) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let content = lines.join("\n");
    for pair in content.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                set_pair(&mut params, key.to_string(), value.trim().to_string());
            }
        }
    }
    params
}

/// Interprets `key=value` lines (first `=` wins) into the global variable map.
fn parse_global_variables(
    lines: &[String],
    globals: &mut std::collections::HashMap<String, String>,
) {
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                globals.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
}

/// Finds the request a cursor line belongs to: the one with the greatest
/// defining line number not exceeding `line`.
///
/// # Arguments
///
/// * `requests` - Parsed requests in any order
/// * `line` - 1-based cursor line number
///
/// # Returns
///
/// The owning request, or `None` when the line precedes every request.
pub fn find_request_at_line(requests: &[ApiRequest], line: usize) -> Option<&ApiRequest> {
    requests
        .iter()
        .filter(|request| request.line_number <= line)
        .max_by_key(|request| request.line_number)
}
