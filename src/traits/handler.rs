//! Handler capability set the mapper reports into.
//!
//! Exactly one method is invoked for each mapped event, and none for event
//! types the mapper ignores. Methods take `&self` so that a single handler
//! can be shared between mappers on different threads.

use crate::models::{ErrorMessage, GlobalUpdate};

/// Receiver of mapped streaming events.
///
/// The three value-level callbacks are reserved for incremental events and
/// are not produced by the current event types; they default to no-ops.
///
/// # Example
///
/// ```ignore
/// use nest_stream::models::{ErrorMessage, GlobalUpdate};
/// use nest_stream::traits::StreamingEventHandler;
///
/// struct Printer;
///
/// impl StreamingEventHandler for Printer {
///     fn handle_update(&self, update: GlobalUpdate) {
///         println!("{} thermostats", update.thermostats().len());
///     }
///     fn handle_error(&self, error: ErrorMessage) {
///         eprintln!("service error: {}", error.message);
///     }
///     fn handle_auth_revoked(&self) {
///         eprintln!("token revoked");
///     }
/// }
/// ```
pub trait StreamingEventHandler: Send + Sync {
    /// A full snapshot arrived on a `put` event.
    fn handle_update(&self, update: GlobalUpdate);

    /// The service reported an error on an `error` event.
    fn handle_error(&self, error: ErrorMessage);

    /// The access token was revoked.
    fn handle_auth_revoked(&self);

    /// A value was added at `path`.
    fn handle_value_added(&self, _path: &str, _data: &str) {}

    /// The value at `path` changed from `old_data` to `data`.
    fn handle_value_changed(&self, _path: &str, _data: &str, _old_data: &str) {}

    /// The value at `path` was removed.
    fn handle_value_removed(&self, _path: &str) {}
}

impl<H: StreamingEventHandler + ?Sized> StreamingEventHandler for &H {
    fn handle_update(&self, update: GlobalUpdate) {
        (**self).handle_update(update)
    }

    fn handle_error(&self, error: ErrorMessage) {
        (**self).handle_error(error)
    }

    fn handle_auth_revoked(&self) {
        (**self).handle_auth_revoked()
    }

    fn handle_value_added(&self, path: &str, data: &str) {
        (**self).handle_value_added(path, data)
    }

    fn handle_value_changed(&self, path: &str, data: &str, old_data: &str) {
        (**self).handle_value_changed(path, data, old_data)
    }

    fn handle_value_removed(&self, path: &str) {
        (**self).handle_value_removed(path)
    }
}

impl<H: StreamingEventHandler + ?Sized> StreamingEventHandler for std::sync::Arc<H> {
    fn handle_update(&self, update: GlobalUpdate) {
        (**self).handle_update(update)
    }

    fn handle_error(&self, error: ErrorMessage) {
        (**self).handle_error(error)
    }

    fn handle_auth_revoked(&self) {
        (**self).handle_auth_revoked()
    }

    fn handle_value_added(&self, path: &str, data: &str) {
        (**self).handle_value_added(path, data)
    }

    fn handle_value_changed(&self, path: &str, data: &str, old_data: &str) {
        (**self).handle_value_changed(path, data, old_data)
    }

    fn handle_value_removed(&self, path: &str) {
        (**self).handle_value_removed(path)
    }
}
