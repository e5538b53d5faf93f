//! Handler that reports every callback through `tracing`.

use tracing::info;

use crate::models::{ErrorMessage, GlobalUpdate};
use crate::traits::StreamingEventHandler;

/// Logs a one-line summary of each callback at `info` level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl TracingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl StreamingEventHandler for TracingHandler {
    fn handle_update(&self, update: GlobalUpdate) {
        info!(
            thermostats = update.thermostats().len(),
            smoke_co_alarms = update.smoke_co_alarms().len(),
            cameras = update.cameras().len(),
            structures = update.structures.len(),
            "Received update"
        );
    }

    fn handle_error(&self, error: ErrorMessage) {
        info!(
            error = %error.error,
            error_type = %error.error_type,
            instance = %error.instance,
            "Received error: {}",
            error.message
        );
    }

    fn handle_auth_revoked(&self) {
        info!("Access token revoked");
    }

    fn handle_value_added(&self, path: &str, data: &str) {
        info!(path, data, "Value added");
    }

    fn handle_value_changed(&self, path: &str, data: &str, old_data: &str) {
        info!(path, data, old_data, "Value changed");
    }

    fn handle_value_removed(&self, path: &str) {
        info!(path, "Value removed");
    }
}
