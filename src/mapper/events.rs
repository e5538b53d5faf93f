//! Tagged result of decoding one streaming event.

use crate::models::{ErrorMessage, GlobalUpdate};
use crate::traits::StreamingEventHandler;

/// Event type carrying a full snapshot
pub const PUT: &str = "put";
/// Event type signalling that the access token was revoked
pub const AUTH_REVOKED: &str = "auth_revoked";
/// Event type carrying an `ErrorMessage`
pub const ERROR: &str = "error";

/// Outcome of decoding a streaming event, before any handler is called
#[derive(Debug, Clone, PartialEq)]
pub enum MappedEvent {
    /// Full snapshot from a `put` event
    Update(GlobalUpdate),
    /// Error report from an `error` event
    Error(ErrorMessage),
    /// `auth_revoked` event; its body is never read
    AuthRevoked,
    /// Any other event type, including keep-alives and future additions
    Ignored { event_type: String },
}

impl MappedEvent {
    /// Returns the event type name as a string for debugging purposes.
    pub fn event_type_name(&self) -> &str {
        match self {
            MappedEvent::Update(_) => PUT,
            MappedEvent::Error(_) => ERROR,
            MappedEvent::AuthRevoked => AUTH_REVOKED,
            MappedEvent::Ignored { event_type } => event_type.as_str(),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, MappedEvent::Ignored { .. })
    }

    /// Invoke the one matching handler callback.
    ///
    /// Returns `false` for ignored events, which reach no callback.
    pub fn dispatch<H: StreamingEventHandler + ?Sized>(self, handler: &H) -> bool {
        match self {
            MappedEvent::Update(update) => handler.handle_update(update),
            MappedEvent::Error(error) => handler.handle_error(error),
            MappedEvent::AuthRevoked => handler.handle_auth_revoked(),
            MappedEvent::Ignored { .. } => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingHandler;
    use crate::adapters::HandlerEvent;

    #[test]
    fn test_event_type_name() {
        assert_eq!(MappedEvent::Update(GlobalUpdate::default()).event_type_name(), "put");
        assert_eq!(MappedEvent::Error(ErrorMessage::default()).event_type_name(), "error");
        assert_eq!(MappedEvent::AuthRevoked.event_type_name(), "auth_revoked");
        assert_eq!(
            MappedEvent::Ignored {
                event_type: "keep-alive".to_string()
            }
            .event_type_name(),
            "keep-alive"
        );
    }

    #[test]
    fn test_dispatch_invokes_one_callback() {
        let handler = RecordingHandler::new();

        assert!(MappedEvent::AuthRevoked.dispatch(&handler));
        assert!(MappedEvent::Update(GlobalUpdate::default()).dispatch(&handler));

        assert_eq!(
            handler.calls(),
            vec![
                HandlerEvent::AuthRevoked,
                HandlerEvent::Update(GlobalUpdate::default())
            ]
        );
    }

    #[test]
    fn test_dispatch_ignored_reaches_nothing() {
        let handler = RecordingHandler::new();
        let event = MappedEvent::Ignored {
            event_type: "patch".to_string(),
        };

        assert!(event.is_ignored());
        assert!(!event.dispatch(&handler));
        assert_eq!(handler.call_count(), 0);
    }
}
