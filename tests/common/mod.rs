//! Common test utilities for integration tests.
//!
//! Fixture loading and mapper construction shared by the integration tests.

#![allow(dead_code)]

use nest_stream::adapters::mock::RecordingHandler;
use nest_stream::mapper::ObjectModelMapper;
use nest_stream::sse::StreamingEvent;

/// Nested `put` payload with one device of each class
pub const GLOBAL_UPDATE_JSON: &str = include_str!("../fixtures/global_update.json");

/// The same state as `GLOBAL_UPDATE_JSON`, keyed by slash-delimited paths
pub const GLOBAL_UPDATE_FLAT_JSON: &str = include_str!("../fixtures/global_update_flat.json");

/// Creates a mapper over a fresh recording handler.
pub fn recording_mapper() -> ObjectModelMapper<RecordingHandler> {
    ObjectModelMapper::new(RecordingHandler::new())
}

/// Creates a `put` event with the given body.
pub fn put_event(body: &str) -> StreamingEvent {
    StreamingEvent::new("put", body)
}

/// Wraps a payload in the `{"path": ..., "data": ...}` envelope.
pub fn enveloped(path: &str, body: &str) -> String {
    format!(r#"{{"path":"{}","data":{}}}"#, path, body)
}
