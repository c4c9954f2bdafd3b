//! Variable resolution for apibook requests.
//!
//! This module provides placeholder extraction and substitution for
//! `{{name}}` tokens, plus the session object that carries remembered
//! overrides between resolutions.

pub mod session;
pub mod substitution;

pub use session::VariableSession;
pub use substitution::{
    extract_placeholders, resolve_for_display, resolve_request, scan_placeholders, substitute,
    substitute_for_display,
};
