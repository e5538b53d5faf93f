//! Streaming event value types
//!
//! Contains the `StreamingEvent` frame handed to the object model mapper and
//! the `SseLine` classification used while framing a text/event-stream.

use serde::{Deserialize, Serialize};

/// Event type the SSE protocol assigns to frames without an `event:` line.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// One frame of the server-push feed: an event type label plus its raw body.
///
/// No validation happens here. An empty or unrecognised event type is legal
/// and is a routing concern of the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamingEvent {
    event_type: String,
    message: String,
}

impl StreamingEvent {
    /// Create a new event from its type label and message body
    pub fn new(event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            message: message.into(),
        }
    }

    /// The event type label (e.g. "put", "auth_revoked")
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The raw message body, usually JSON text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Split the event back into its parts
    pub fn into_parts(self) -> (String, String) {
        (self.event_type, self.message)
    }
}

/// One line of a text/event-stream, split into field and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// `event:` field naming the type of the pending frame
    Event(String),
    /// One `data:` field; a frame's data fields join with `\n`
    Data(String),
    /// Blank line terminating the pending frame
    Blank,
    /// Line starting with `:`, used for keep-alives
    Comment(String),
    /// `id:`, `retry:` or any other field the mapper has no use for
    Other { field: String, value: String },
}
