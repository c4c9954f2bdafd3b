//! apibook - plain-text API request documents.
//!
//! This crate implements a human-editable document format for describing
//! named HTTP requests, and the machinery around it: parsing a document into
//! a structured model, resolving `{{variable}}` placeholders against a
//! layered variable environment, and rendering a resolved request into
//! transport-ready forms.
//!
//! # Document format
//!
//! ```text
//! Global:
//!   host=api.example.com
//!
//! ### Get User
//! GET https://{{host}}/users/{{id}}
//! Header:
//!   Authorization: Bearer {{token}}
//!
//! ### Create User
//! POST https://{{host}}/users
//! Body:
//! {
//!   "name": "{{name}}"
//! }
//!
//! #### Response 200 OK
//! previously recorded response, ignored by the parser
//! ####
//! ```
//!
//! A request starts at a `### <name>` marker and carries a `METHOD url` line
//! plus optional sections (`Header:`, `Params:`, `Path:`, `Body:`, `Form:`).
//! `Global:` sections define document-wide variables. `#### Response` blocks
//! hold recorded responses and are skipped entirely.
//!
//! # Architecture
//!
//! - **models**: data structures for documents and requests
//! - **parser**: line-scanning state machine producing the document model
//! - **variables**: placeholder extraction, substitution, and the session
//!   override store
//! - **render**: curl / raw-HTTP / summary rendering of a resolved request
//! - **transport**: trait seams for the network and prompting collaborators
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//!
//! let text = "### Get User\nGET https://api.example.com/users/{{id}}\n";
//! let document = apibook::parser::parse(text).unwrap();
//!
//! let request = &document.requests[0];
//! let mut variables = HashMap::new();
//! variables.insert("id".to_string(), "42".to_string());
//!
//! let resolved = apibook::variables::resolve_request(request, &variables);
//! let info = apibook::render::render(&resolved);
//! assert!(info.curl.starts_with("curl -X GET \"https://api.example.com/users/42\""));
//! ```
//!
//! Parsing is all-or-nothing: any structural error yields the full error list
//! and no requests. An unresolved placeholder is never an error; the
//! transport rendering leaves it literal while display renderings bracket it.

pub mod models;
pub mod parser;
pub mod render;
pub mod transport;
pub mod variables;

pub use models::{ApiDocument, ApiRequest, HttpMethod, SectionKind};
pub use parser::error::ParseError;
pub use parser::{find_request_at_line, parse};
pub use render::{
    build_request_info, format_duration, format_size, render, BodyType, RequestInfo,
    RequestSummary,
};
pub use transport::{
    prepare_request, PrepareError, PromptVariables, Transport, TransportError, TransportOutcome,
};
pub use variables::{
    extract_placeholders, resolve_for_display, resolve_request, substitute,
    substitute_for_display, VariableSession,
};
