//! Replay configuration.
//!
//! Settings for the `nest-replay` binary. The mapper itself is stateless and
//! takes no configuration.

use std::path::PathBuf;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "NEST_STREAM_LOG";
/// Environment variable switching on JSON log output
pub const JSON_LOGS_ENV: &str = "NEST_STREAM_JSON_LOGS";

const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for replaying a captured event stream.
///
/// # Example
///
/// ```ignore
/// use nest_stream::config::ReplayConfig;
///
/// let config = ReplayConfig::from_env()
///     .with_input("capture.sse")
///     .with_json_logs(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Transcript to read; stdin when `None`
    pub input: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive (default: "info")
    pub log_filter: String,
    /// Emit JSON structured logs instead of human-readable text
    pub json_logs: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            input: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_logs: false,
        }
    }
}

impl ReplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transcript path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set whether logs are written as JSON.
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Create config from `NEST_STREAM_LOG` and `NEST_STREAM_JSON_LOGS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(filter) = std::env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Ok(json) = std::env::var(JSON_LOGS_ENV) {
            config.json_logs = matches!(json.trim(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(LOG_ENV);
        std::env::remove_var(JSON_LOGS_ENV);
    }

    #[test]
    fn test_default_config() {
        let config = ReplayConfig::default();
        assert!(config.input.is_none());
        assert_eq!(config.log_filter, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_builder() {
        let config = ReplayConfig::new()
            .with_input("capture.sse")
            .with_log_filter("nest_stream=debug")
            .with_json_logs(true);
        assert_eq!(config.input, Some(PathBuf::from("capture.sse")));
        assert_eq!(config.log_filter, "nest_stream=debug");
        assert!(config.json_logs);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(ReplayConfig::from_env(), ReplayConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var(LOG_ENV, "nest_stream=trace");
        std::env::set_var(JSON_LOGS_ENV, "1");

        let config = ReplayConfig::from_env();
        assert_eq!(config.log_filter, "nest_stream=trace");
        assert!(config.json_logs);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_filter() {
        clear_env();
        std::env::set_var(LOG_ENV, "  ");
        std::env::set_var(JSON_LOGS_ENV, "no");

        let config = ReplayConfig::from_env();
        assert_eq!(config.log_filter, "info");
        assert!(!config.json_logs);

        clear_env();
    }
}
