//! Result type alias for mapping operations.

use super::parse::ParseError;

/// Type alias for Results using ParseError.
///
/// # Example
///
/// ```ignore
/// use nest_stream::error::MapResult;
///
/// fn decode(body: &str) -> MapResult<GlobalUpdate> {
///     // Implementation that may fail on malformed JSON
/// }
/// ```
pub type MapResult<T> = Result<T, ParseError>;
