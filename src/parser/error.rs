//! Error types for document parsing.
//!
//! Parsing is all-or-nothing: structural errors are collected across the whole
//! document and returned together, never thrown one at a time.

use std::fmt;

/// Errors that can occur while parsing an apibook document.
///
/// Each variant carries the 1-based line number a user needs to locate the
/// problem. Validation errors point at the `###` marker line that defined the
/// offending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A finalized request has no name after its `###` marker.
    MissingName {
        /// Line number of the request's `###` marker (1-based)
        line: usize,
    },

    /// A finalized request never received a `METHOD url` line.
    MissingMethod {
        /// Line number of the request's `###` marker (1-based)
        line: usize,
    },

    /// A finalized request has a method but no URL.
    MissingUrl {
        /// Line number of the request's `###` marker (1-based)
        line: usize,
    },

    /// A `METHOD url` line appeared before any `###` request marker.
    MethodWithoutRequest {
        /// Line number of the stray method line (1-based)
        line: usize,
    },
}

impl ParseError {
    /// Returns the line number associated with this error.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingName { line }
            | ParseError::MissingMethod { line }
            | ParseError::MissingUrl { line }
            | ParseError::MethodWithoutRequest { line } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingName { line } => {
                write!(f, "API name is required (line {})", line)
            }
            ParseError::MissingMethod { line } => {
                write!(f, "HTTP method is required (line {})", line)
            }
            ParseError::MissingUrl { line } => {
                write!(f, "URL is required (line {})", line)
            }
            ParseError::MethodWithoutRequest { line } => {
                write!(
                    f,
                    "HTTP method found without API definition (line {})",
                    line
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_line() {
        assert_eq!(ParseError::MissingName { line: 4 }.line(), 4);
        assert_eq!(ParseError::MissingMethod { line: 7 }.line(), 7);
        assert_eq!(ParseError::MethodWithoutRequest { line: 1 }.line(), 1);
    }

    #[test]
    fn test_parse_error_display() {
        let msg = format!("{}", ParseError::MissingMethod { line: 5 });
        assert!(msg.contains("HTTP method is required"));
        assert!(msg.contains("line 5"));

        let msg = format!("{}", ParseError::MethodWithoutRequest { line: 2 });
        assert!(msg.contains("without API definition"));
    }

    #[test]
    fn test_parse_error_equality() {
        assert_eq!(
            ParseError::MissingUrl { line: 3 },
            ParseError::MissingUrl { line: 3 }
        );
        assert_ne!(
            ParseError::MissingUrl { line: 3 },
            ParseError::MissingUrl { line: 4 }
        );
    }
}
