//! Error handling for the event mapper.
//!
//! There is a single failure kind: a [`ParseError`], raised when the body of a
//! `put` or `error` event cannot be read as a JSON object. Unknown event types,
//! unknown fields and missing sections are not errors.
//!
//! | Variant | Cause | Code |
//! |---------|-------|------|
//! | `InvalidJson` | Truncated or malformed JSON text | `E_PARSE_JSON` |
//! | `UnexpectedShape` | Valid JSON whose top level is not an object | `E_PARSE_SHAPE` |

mod parse;
mod result;

pub use parse::ParseError;
pub use result::MapResult;
