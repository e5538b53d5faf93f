//! SSE stream framing logic
//!
//! Contains the stateful `SseParser` that accumulates lines and emits
//! `StreamingEvent` frames, and the line classifier it is built on.

use crate::sse::events::{SseLine, StreamingEvent, DEFAULT_EVENT_TYPE};

/// Classify a single SSE line
///
/// The field name runs up to the first `:`. One space after the colon is
/// dropped; everything else in the value is kept. A line without a colon is
/// a field with an empty value.
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Blank;
    }

    let (field, value) = match line.split_once(':') {
        Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
        None => (line, ""),
    };

    match field {
        "" => SseLine::Comment(value.to_string()),
        "event" => SseLine::Event(value.to_string()),
        "data" => SseLine::Data(value.to_string()),
        _ => SseLine::Other {
            field: field.to_string(),
            value: value.to_string(),
        },
    }
}

/// Stateful SSE parser that accumulates lines and emits complete frames
#[derive(Debug, Default)]
pub struct SseParser {
    /// Current event type being accumulated
    current_event_type: Option<String>,
    /// Accumulated data lines (SSE allows multiple data: lines)
    data_buffer: Vec<String>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, potentially returning a complete frame
    ///
    /// Returns `Some(event)` when the line terminates an event and `None`
    /// while the event is still being accumulated.
    pub fn feed_line(&mut self, line: &str) -> Option<StreamingEvent> {
        // Tolerate CRLF transcripts
        let line = line.strip_suffix('\r').unwrap_or(line);

        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                // An empty name falls back to the default type
                self.current_event_type = Some(event_type).filter(|name| !name.is_empty());
                None
            }
            SseLine::Data(data) => {
                self.data_buffer.push(data);
                None
            }
            SseLine::Blank => self.take_event(),
            SseLine::Comment(_) | SseLine::Other { .. } => None,
        }
    }

    /// Flush an event left unterminated at the end of the stream
    pub fn finish(&mut self) -> Option<StreamingEvent> {
        self.take_event()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.current_event_type = None;
        self.data_buffer.clear();
    }

    fn take_event(&mut self) -> Option<StreamingEvent> {
        if self.current_event_type.is_none() && self.data_buffer.is_empty() {
            return None;
        }

        let event_type = self
            .current_event_type
            .take()
            .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string());
        let data = self.data_buffer.join("\n");
        self.data_buffer.clear();

        Some(StreamingEvent::new(event_type, data))
    }
}
