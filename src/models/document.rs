//! Document data model.
//!
//! A parsed document is a value object: built once per parse, never mutated by
//! consumers. Any text edit requires a fresh parse.

use crate::models::request::ApiRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fully parsed apibook document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Requests in source order.
    pub requests: Vec<ApiRequest>,

    /// Document-scoped variables collected from `Global:` sections.
    pub global_variables: HashMap<String, String>,

    /// Every distinct `{{name}}` found anywhere in the raw text (including
    /// skipped response blocks), mapped to an empty value. A document-wide
    /// index of names a caller may need to supply, separate from any one
    /// request's own placeholders.
    pub discovered_placeholders: HashMap<String, String>,
}

impl ApiDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}
