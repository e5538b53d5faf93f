//! Body decoders for the event types the mapper understands.
//!
//! Decoding is strict in syntax and permissive in shape: malformed JSON is a
//! `ParseError`, unknown fields and missing sections are not.

use serde_json::{Map, Value};

use crate::error::{MapResult, ParseError};
use crate::mapper::events::MappedEvent;
use crate::mapper::graph::build_update;
use crate::models::ErrorMessage;

/// Parse a body that must be a JSON object
pub(super) fn parse_object(event_type: &str, data: &str) -> MapResult<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| ParseError::invalid_json(event_type, &e))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::UnexpectedShape {
            event_type: event_type.to_string(),
            detail: format!("expected a JSON object, found {}", describe(&other)),
        }),
    }
}

/// Parse put event
pub(super) fn parse_put_event(event_type: &str, data: &str) -> MapResult<MappedEvent> {
    let root = parse_object(event_type, data)?;
    Ok(MappedEvent::Update(build_update(root)))
}

/// Parse error event
pub(super) fn parse_error_event(event_type: &str, data: &str) -> MapResult<MappedEvent> {
    let root = parse_object(event_type, data)?;
    let error: ErrorMessage =
        serde_json::from_value(Value::Object(root)).map_err(|e| ParseError::UnexpectedShape {
            event_type: event_type.to_string(),
            detail: e.to_string(),
        })?;
    Ok(MappedEvent::Error(error))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_rejects_truncated_json() {
        let result = parse_object("error", r#"{"error":"unauthorized""#);
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn test_parse_object_rejects_empty_body() {
        let result = parse_object("put", "");
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn test_parse_object_rejects_non_object() {
        let err = parse_object("put", "[1,2]").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedShape {
                event_type: "put".to_string(),
                detail: "expected a JSON object, found an array".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_error_event() {
        let event = parse_error_event(
            "error",
            r#"{"error":"blocked","type":"rate-limit","message":"Too many requests","instance":"abc"}"#,
        )
        .unwrap();
        match event {
            MappedEvent::Error(msg) => {
                assert_eq!(msg.error, "blocked");
                assert_eq!(msg.error_type, "rate-limit");
                assert_eq!(msg.message, "Too many requests");
            }
            other => panic!("Expected Error event, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_event_with_nested_field_is_shape_error() {
        let result = parse_error_event("error", r#"{"error":{"code":1}}"#);
        assert!(matches!(result, Err(ParseError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_parse_put_event_without_sections() {
        let event = parse_put_event("put", r#"{"unrelated": true}"#).unwrap();
        match event {
            MappedEvent::Update(update) => assert!(update.is_empty()),
            other => panic!("Expected Update event, got {:?}", other),
        }
    }
}
