//! Shared helper functions for machine tool implementations.

use serde_json::Value;

/// Whether a fetched payload carries nothing worth rendering.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// First element of a sequence payload; `None` for anything else.
pub fn first_entry(payload: Option<Value>) -> Option<Value> {
    match payload? {
        Value::Array(items) => items.into_iter().next(),
        _ => None,
    }
}

/// Render a value as tool output: strings verbatim, everything else as JSON text.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payloads() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!([])));
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&json!("")));
        assert!(!is_empty_payload(&json!([0])));
        assert!(!is_empty_payload(&json!({"id": 1})));
        assert!(!is_empty_payload(&json!(0)));
    }

    #[test]
    fn test_first_entry() {
        assert_eq!(first_entry(Some(json!(["a", "b"]))), Some(json!("a")));
        assert_eq!(first_entry(Some(json!([]))), None);
        assert_eq!(first_entry(Some(json!({"id": 1}))), None);
        assert_eq!(first_entry(None), None);
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!("29")), "29");
        assert_eq!(value_to_text(&json!(29)), "29");
        assert_eq!(value_to_text(&json!({"lastShotId": "29"})), r#"{"lastShotId":"29"}"#);
    }
}
