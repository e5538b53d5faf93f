//! SSE (Server-Sent Events) framing
//!
//! Turns the text/event-stream delivered by the transport into
//! [`StreamingEvent`] frames. SSE format consists of:
//! - `event: <type>` - event type line
//! - `data: <json>` - data payload line
//! - Blank line - terminates the pending event
//! - Other fields (`id:`, `retry:`) - parsed and skipped
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - `StreamingEvent` and `SseLine`
//! - `parser` - Framing logic (`SseParser`, `parse_sse_line`)

mod events;
mod parser;

pub use events::{SseLine, StreamingEvent, DEFAULT_EVENT_TYPE};
pub use parser::{parse_sse_line, SseParser};
