//! Concrete implementations of [`StreamingEventHandler`](crate::traits::StreamingEventHandler).
//!
//! # Adapters
//!
//! - [`ChannelHandler`] - forwards callbacks over a tokio mpsc channel
//! - [`TracingHandler`] - logs callbacks through `tracing`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingHandler`] - records callbacks for assertions

pub mod channel;
pub mod mock;
pub mod tracing_handler;

pub use channel::{ChannelHandler, HandlerEvent};
pub use mock::RecordingHandler;
pub use tracing_handler::TracingHandler;
