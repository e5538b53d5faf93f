//! Trait abstractions at the seams of the mapper.
//!
//! - [`StreamingEventHandler`] - callbacks invoked for mapped events

pub mod handler;

pub use handler::StreamingEventHandler;
