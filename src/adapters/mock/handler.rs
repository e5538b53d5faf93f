//! Recording handler for testing.
//!
//! Captures every callback so tests can assert exactly which ones ran.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::adapters::HandlerEvent;
use crate::models::{ErrorMessage, GlobalUpdate};
use crate::traits::StreamingEventHandler;

/// Handler that records callbacks in memory.
///
/// Clones share the same record, so a clone can be handed to a mapper while
/// the test keeps another for assertions.
///
/// # Example
///
/// ```ignore
/// use nest_stream::adapters::mock::RecordingHandler;
/// use nest_stream::mapper::ObjectModelMapper;
///
/// let handler = RecordingHandler::new();
/// let mapper = ObjectModelMapper::new(handler.clone());
///
/// mapper.map(&StreamingEvent::new("auth_revoked", ""))?;
/// assert_eq!(handler.auth_revoked_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<HandlerEvent>>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded callbacks in call order
    pub fn calls(&self) -> Vec<HandlerEvent> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// The most recent update, if any
    pub fn last_update(&self) -> Option<GlobalUpdate> {
        self.lock().iter().rev().find_map(|call| match call {
            HandlerEvent::Update(update) => Some(update.clone()),
            _ => None,
        })
    }

    /// The most recent error message, if any
    pub fn last_error(&self) -> Option<ErrorMessage> {
        self.lock().iter().rev().find_map(|call| match call {
            HandlerEvent::Error(error) => Some(error.clone()),
            _ => None,
        })
    }

    pub fn auth_revoked_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|call| matches!(call, HandlerEvent::AuthRevoked))
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, event: HandlerEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HandlerEvent>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StreamingEventHandler for RecordingHandler {
    fn handle_update(&self, update: GlobalUpdate) {
        self.record(HandlerEvent::Update(update));
    }

    fn handle_error(&self, error: ErrorMessage) {
        self.record(HandlerEvent::Error(error));
    }

    fn handle_auth_revoked(&self) {
        self.record(HandlerEvent::AuthRevoked);
    }

    fn handle_value_added(&self, path: &str, data: &str) {
        self.record(HandlerEvent::ValueAdded {
            path: path.to_string(),
            data: data.to_string(),
        });
    }

    fn handle_value_changed(&self, path: &str, data: &str, old_data: &str) {
        self.record(HandlerEvent::ValueChanged {
            path: path.to_string(),
            data: data.to_string(),
            old_data: old_data.to_string(),
        });
    }

    fn handle_value_removed(&self, path: &str) {
        self.record(HandlerEvent::ValueRemoved {
            path: path.to_string(),
        });
    }
}
