use serde::{Deserialize, Deserializer, Serialize};

/// Error report sent by the service on an `error` event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    /// Short error name, e.g. "unauthorized"
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub error: String,
    /// Error category, e.g. "auth-error"
    #[serde(rename = "type", deserialize_with = "deserialize_lenient_string")]
    pub error_type: String,
    /// Human-readable description
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub message: String,
    /// Identifier of this occurrence, for support requests
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub instance: String,
}

/// Accept a string, number, boolean or null where text is expected
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_ignores_unknown_fields() {
        let json = r#"{"error":"unauthorized","type":"auth-error","message":"unauthorized","instance":"2372e4af-c774-495f-b485-5e6a81aa27fe","unknown":"ignore"}"#;
        let msg: ErrorMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.error, "unauthorized");
        assert_eq!(msg.error_type, "auth-error");
        assert_eq!(msg.message, "unauthorized");
        assert_eq!(msg.instance, "2372e4af-c774-495f-b485-5e6a81aa27fe");
    }

    #[test]
    fn test_error_message_missing_fields_default_to_empty() {
        let msg: ErrorMessage = serde_json::from_str(r#"{"error":"blocked"}"#).unwrap();
        assert_eq!(msg.error, "blocked");
        assert!(msg.error_type.is_empty());
        assert!(msg.instance.is_empty());
    }

    #[test]
    fn test_error_message_lenient_scalars() {
        let msg: ErrorMessage =
            serde_json::from_str(r#"{"error":429,"type":null,"message":true,"instance":1.5}"#)
                .unwrap();
        assert_eq!(msg.error, "429");
        assert_eq!(msg.error_type, "");
        assert_eq!(msg.message, "true");
        assert_eq!(msg.instance, "1.5");
    }

    #[test]
    fn test_error_message_serializes_type_field() {
        let msg = ErrorMessage {
            error: "unauthorized".to_string(),
            error_type: "auth-error".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"auth-error""#));
    }
}
