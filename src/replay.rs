//! Replaying a captured text/event-stream through the mapper.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::error::ParseError;
use crate::mapper::decode_event;
use crate::sse::{SseParser, StreamingEvent};
use crate::traits::StreamingEventHandler;

/// Counts gathered while replaying a transcript
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    /// Frames read from the transcript
    pub events: usize,
    /// Frames that reached a handler callback
    pub dispatched: usize,
    /// Frames whose event type is not mapped
    pub ignored: usize,
    /// Frames whose body failed to parse
    pub failures: Vec<ParseError>,
}

impl ReplaySummary {
    fn record(&mut self, event: &StreamingEvent, handler: &impl StreamingEventHandler) {
        self.events += 1;
        match decode_event(event) {
            Ok(mapped) => {
                if mapped.dispatch(handler) {
                    self.dispatched += 1;
                } else {
                    debug!(event_type = event.event_type(), "Ignoring streaming event");
                    self.ignored += 1;
                }
            }
            Err(err) => {
                warn!(code = err.error_code(), "{}", err);
                self.failures.push(err);
            }
        }
    }
}

/// Frame every event in `reader` and report it to `handler`.
///
/// Parse failures are collected rather than aborting the replay. Only I/O
/// errors from the reader stop it early.
pub fn replay<R, H>(reader: R, handler: &H) -> std::io::Result<ReplaySummary>
where
    R: BufRead,
    H: StreamingEventHandler,
{
    let mut parser = SseParser::new();
    let mut summary = ReplaySummary::default();

    for line in reader.lines() {
        if let Some(event) = parser.feed_line(&line?) {
            summary.record(&event, handler);
        }
    }

    if let Some(event) = parser.finish() {
        summary.record(&event, handler);
    }

    Ok(summary)
}
