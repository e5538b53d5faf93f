//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`RecordingHandler`] - handler that records every callback

pub mod handler;

pub use handler::RecordingHandler;
