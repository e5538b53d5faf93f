//! Channel-backed handler for async consumers.
//!
//! Forwards every callback as a [`HandlerEvent`] over an unbounded tokio
//! mpsc channel, so an async task can consume mapped events in order.

use tokio::sync::mpsc;
use tracing::warn;

use crate::models::{ErrorMessage, GlobalUpdate};
use crate::traits::StreamingEventHandler;

/// One handler callback, captured as a value
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerEvent {
    Update(GlobalUpdate),
    Error(ErrorMessage),
    AuthRevoked,
    ValueAdded {
        path: String,
        data: String,
    },
    ValueChanged {
        path: String,
        data: String,
        old_data: String,
    },
    ValueRemoved {
        path: String,
    },
}

impl HandlerEvent {
    /// Name of the callback this event stands for
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerEvent::Update(_) => "update",
            HandlerEvent::Error(_) => "error",
            HandlerEvent::AuthRevoked => "auth_revoked",
            HandlerEvent::ValueAdded { .. } => "value_added",
            HandlerEvent::ValueChanged { .. } => "value_changed",
            HandlerEvent::ValueRemoved { .. } => "value_removed",
        }
    }
}

/// Handler that sends each callback down an mpsc channel.
///
/// # Example
///
/// ```ignore
/// use nest_stream::adapters::ChannelHandler;
/// use nest_stream::mapper::ObjectModelMapper;
///
/// let (handler, mut rx) = ChannelHandler::channel();
/// let mapper = ObjectModelMapper::new(handler);
///
/// mapper.map(&event)?;
/// while let Some(event) = rx.recv().await {
///     println!("{}", event.kind());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelHandler {
    tx: mpsc::UnboundedSender<HandlerEvent>,
}

impl ChannelHandler {
    pub fn new(tx: mpsc::UnboundedSender<HandlerEvent>) -> Self {
        Self { tx }
    }

    /// Create a handler together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HandlerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: HandlerEvent) {
        let kind = event.kind();
        if self.tx.send(event).is_err() {
            warn!(kind, "Handler channel closed, dropping event");
        }
    }
}

impl StreamingEventHandler for ChannelHandler {
    fn handle_update(&self, update: GlobalUpdate) {
        self.send(HandlerEvent::Update(update));
    }

    fn handle_error(&self, error: ErrorMessage) {
        self.send(HandlerEvent::Error(error));
    }

    fn handle_auth_revoked(&self) {
        self.send(HandlerEvent::AuthRevoked);
    }

    fn handle_value_added(&self, path: &str, data: &str) {
        self.send(HandlerEvent::ValueAdded {
            path: path.to_string(),
            data: data.to_string(),
        });
    }

    fn handle_value_changed(&self, path: &str, data: &str, old_data: &str) {
        self.send(HandlerEvent::ValueChanged {
            path: path.to_string(),
            data: data.to_string(),
            old_data: old_data.to_string(),
        });
    }

    fn handle_value_removed(&self, path: &str) {
        self.send(HandlerEvent::ValueRemoved {
            path: path.to_string(),
        });
    }
}
