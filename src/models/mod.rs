//! Core data models for apibook documents and requests.

pub mod document;
pub mod request;

pub use document::ApiDocument;
pub use request::{ApiRequest, HttpMethod, SectionKind};
