//! nest-stream - maps Nest streaming API events onto typed models
//!
//! Raw text/event-stream lines are framed into [`sse::StreamingEvent`]s,
//! decoded by [`mapper::ObjectModelMapper`] and reported to a
//! [`traits::StreamingEventHandler`].

pub mod adapters;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod models;
pub mod replay;
pub mod sse;
pub mod traits;
