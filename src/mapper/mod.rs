//! Object model mapper
//!
//! Routes each [`StreamingEvent`] by its type label, decodes the body into
//! domain models and reports the result to a [`StreamingEventHandler`].
//!
//! | Event type | Outcome |
//! |------------|---------|
//! | `put` | `handle_update` with a [`GlobalUpdate`](crate::models::GlobalUpdate) |
//! | `auth_revoked` | `handle_auth_revoked`; the body is not read |
//! | `error` | `handle_error` with an [`ErrorMessage`](crate::models::ErrorMessage) |
//! | anything else | nothing |
//!
//! Malformed `put` and `error` bodies fail with a [`ParseError`] and reach no
//! callback.
//!
//! # Module structure
//! - `events` - `MappedEvent` and the event type labels
//! - `decode` - body decoders per event type
//! - `graph` - path routing and the update graph builder

mod decode;
mod events;
mod graph;

pub use events::{MappedEvent, AUTH_REVOKED, ERROR, PUT};

use tracing::{debug, trace};

use crate::error::MapResult;
use crate::sse::StreamingEvent;
use crate::traits::StreamingEventHandler;
use decode::{parse_error_event, parse_put_event};

/// Decode a streaming event without dispatching it
pub fn decode_event(event: &StreamingEvent) -> MapResult<MappedEvent> {
    let event_type = event.event_type();
    match event_type {
        PUT => parse_put_event(event_type, event.message()),
        AUTH_REVOKED => Ok(MappedEvent::AuthRevoked),
        ERROR => parse_error_event(event_type, event.message()),
        // Ignore unknown events instead of erroring (forward compatible)
        _ => Ok(MappedEvent::Ignored {
            event_type: event_type.to_string(),
        }),
    }
}

/// Stateless router from streaming events to handler callbacks.
///
/// `map` may be called from several threads at once when the handler
/// tolerates concurrent calls; no ordering is imposed across threads.
#[derive(Debug, Clone)]
pub struct ObjectModelMapper<H> {
    handler: H,
}

impl<H: StreamingEventHandler> ObjectModelMapper<H> {
    /// Create a mapper reporting into `handler`
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Decode `event` and invoke at most one handler callback.
    ///
    /// Returns `Err` without calling the handler when a `put` or `error`
    /// body cannot be parsed.
    pub fn map(&self, event: &StreamingEvent) -> MapResult<()> {
        let mapped = decode_event(event).map_err(|err| {
            debug!(
                event_type = event.event_type(),
                code = err.error_code(),
                "Failed to decode streaming event"
            );
            err
        })?;

        match &mapped {
            MappedEvent::Ignored { event_type } => {
                debug!(event_type = %event_type, "Ignoring streaming event");
            }
            other => trace!(event_type = other.event_type_name(), "Dispatching streaming event"),
        }

        mapped.dispatch(&self.handler);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingHandler;
    use crate::error::ParseError;
    use crate::adapters::HandlerEvent;

    fn mapper() -> ObjectModelMapper<RecordingHandler> {
        ObjectModelMapper::new(RecordingHandler::new())
    }

    #[test]
    fn test_map_skips_unknown_event() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("unknown", "")).unwrap();
        assert_eq!(mapper.handler().call_count(), 0);
    }

    #[test]
    fn test_map_skips_empty_event_type() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("", "{not json")).unwrap();
        assert_eq!(mapper.handler().call_count(), 0);
    }

    #[test]
    fn test_map_routing_is_case_sensitive() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("PUT", "{}")).unwrap();
        mapper.map(&StreamingEvent::new("Auth_Revoked", "")).unwrap();
        assert_eq!(mapper.handler().call_count(), 0);
    }

    #[test]
    fn test_map_auth_revoked_ignores_body() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("auth_revoked", "")).unwrap();
        mapper
            .map(&StreamingEvent::new("auth_revoked", "{truncated"))
            .unwrap();
        assert_eq!(
            mapper.handler().calls(),
            vec![HandlerEvent::AuthRevoked, HandlerEvent::AuthRevoked]
        );
    }

    #[test]
    fn test_map_error_event() {
        let mapper = mapper();
        let json = r#"{"error":"unauthorized","type":"auth-error","message":"unauthorized","instance":"2372e4af-c774-495f-b485-5e6a81aa27fe","unknown":"ignore"}"#;
        mapper.map(&StreamingEvent::new("error", json)).unwrap();

        let error = mapper.handler().last_error().unwrap();
        assert_eq!(error.error, "unauthorized");
        assert_eq!(error.error_type, "auth-error");
        assert_eq!(mapper.handler().call_count(), 1);
    }

    #[test]
    fn test_map_truncated_error_event_fails() {
        let mapper = mapper();
        let result = mapper.map(&StreamingEvent::new("error", r#"{"error":"unauthorized""#));

        let err = result.unwrap_err();
        assert_eq!(err.event_type(), "error");
        assert!(matches!(err, ParseError::InvalidJson { .. }));
        assert_eq!(mapper.handler().call_count(), 0);
    }

    #[test]
    fn test_map_malformed_put_event_fails() {
        let mapper = mapper();
        let result = mapper.map(&StreamingEvent::new("put", r#"{"devices":"cameras":{}"#));

        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
        assert_eq!(mapper.handler().call_count(), 0);
    }

    #[test]
    fn test_map_put_event_without_sections() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("put", "{}")).unwrap();

        let update = mapper.handler().last_update().unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_decode_event_does_not_dispatch() {
        let event = StreamingEvent::new("put", r#"{"metadata":{"user_id":"u1"}}"#);
        match decode_event(&event).unwrap() {
            MappedEvent::Update(update) => {
                assert_eq!(update.metadata.user_id.as_deref(), Some("u1"))
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn test_into_handler_returns_recorded_calls() {
        let mapper = mapper();
        mapper.map(&StreamingEvent::new("auth_revoked", "")).unwrap();
        let handler = mapper.into_handler();
        assert_eq!(handler.auth_revoked_count(), 1);
    }
}
