//! Collaborator seams for transport and interactive prompting.
//!
//! The core never performs network I/O and never prompts a user; both
//! capabilities are supplied by callers through the traits here. What the
//! core does own is the precedence contract for assembling the variable map:
//! document globals lowest, session overrides above them, freshly prompted
//! values on top, with prompt cancellation aborting the whole sequence.

use crate::models::ApiRequest;
use crate::variables::{extract_placeholders, resolve_request, VariableSession};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Outcome of a completed network exchange, as reported by a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportOutcome {
    /// HTTP status code.
    pub status: u16,

    /// Status reason phrase.
    pub status_text: String,

    /// Response headers as ordered key-value pairs.
    pub headers: Vec<(String, String)>,

    /// Response body text.
    pub body: String,

    /// Wall-clock duration of the exchange.
    pub duration: Duration,

    /// Response size in bytes.
    pub size_bytes: usize,
}

/// A transport-level failure reported by a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportError {
    /// Human-readable description of the failure.
    pub message: String,

    /// HTTP status, when the server answered with an error status.
    pub status: Option<u16>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "request failed ({}): {}", status, self.message),
            None => write!(f, "request failed: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Capability to send a resolved request over the network.
///
/// Implementations receive a request whose placeholders have already been
/// substituted; any `{{...}}` text still present was deliberately left
/// literal.
pub trait Transport {
    /// Sends the request and reports the exchange outcome.
    fn send(&self, request: &ApiRequest) -> Result<TransportOutcome, TransportError>;
}

/// Capability to ask the user for a variable value.
pub trait PromptVariables {
    /// Prompts for one variable.
    ///
    /// # Returns
    ///
    /// The supplied value, or `None` when the user cancelled.
    fn prompt(&self, name: &str, default: &str) -> Option<String>;
}

/// Errors from the resolve-and-prepare sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    /// The user cancelled the prompt for a variable. The whole sequence is
    /// aborted; nothing is sent with a half-resolved request.
    Cancelled {
        /// Name of the variable whose prompt was cancelled
        name: String,
    },
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepareError::Cancelled { name } => {
                write!(f, "variable input cancelled for '{}'", name)
            }
        }
    }
}

impl std::error::Error for PrepareError {}

/// Assembles the variable map for a request and returns its resolved copy.
///
/// Layering, lowest to highest precedence: document globals, session
/// overrides, freshly prompted values. Every placeholder name still absent or
/// empty after layering is prompted for through `prompter`; supplied values
/// are remembered in the session for later resolutions. A cancelled prompt
/// aborts the whole sequence.
///
/// # Arguments
///
/// * `request` - The parsed request to resolve
/// * `globals` - The document's global variables
/// * `session` - Caller-owned session override store
/// * `prompter` - Capability used for still-missing names
///
/// # Returns
///
/// A resolved derived copy of the request, ready for [`render`] or a
/// [`Transport`].
///
/// [`render`]: crate::render::render
pub fn prepare_request(
    request: &ApiRequest,
    globals: &HashMap<String, String>,
    session: &mut VariableSession,
    prompter: &dyn PromptVariables,
) -> Result<ApiRequest, PrepareError> {
    let required = extract_placeholders(request);
    let mut merged = session.layer(globals);

    for name in VariableSession::missing_names(&merged, &required) {
        let default = merged.get(&name).cloned().unwrap_or_default();
        let Some(value) = prompter.prompt(&name, &default) else {
            return Err(PrepareError::Cancelled { name });
        };
        merged.insert(name.clone(), value.clone());
        session.set(name, value);
    }

    Ok(resolve_request(request, &merged))
}
