//! Parser failure raised while decoding streaming event bodies.
//!
//! A `ParseError` escapes synchronously from `ObjectModelMapper::map`. It is
//! a different channel from the handler's error callback, which only ever
//! receives `ErrorMessage`s sent by the service.

use thiserror::Error;

/// Failure to read the body of a `put` or `error` event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The body is not syntactically valid JSON.
    #[error("Invalid JSON for {event_type} event at line {line}, column {column}: {message}")]
    InvalidJson {
        event_type: String,
        message: String,
        line: usize,
        column: usize,
    },

    /// The body is valid JSON but cannot be read as the event's payload,
    /// e.g. its top level is not an object.
    #[error("Unexpected payload for {event_type} event: {detail}")]
    UnexpectedShape { event_type: String, detail: String },
}

impl ParseError {
    /// Build an `InvalidJson` error from a serde_json failure.
    pub fn invalid_json(event_type: &str, err: &serde_json::Error) -> Self {
        ParseError::InvalidJson {
            event_type: event_type.to_string(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// The event type whose body failed to parse.
    pub fn event_type(&self) -> &str {
        match self {
            ParseError::InvalidJson { event_type, .. } => event_type,
            ParseError::UnexpectedShape { event_type, .. } => event_type,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::InvalidJson { .. } => "E_PARSE_JSON",
            ParseError::UnexpectedShape { .. } => "E_PARSE_SHAPE",
        }
    }

    /// Parser failures are never retried; the same bytes fail the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
