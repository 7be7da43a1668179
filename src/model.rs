//! Response-shape handling for AgroView API payloads.
//!
//! Records returned by the API are opaque JSON objects; the client never
//! models their schema. The only structure it interprets is the envelope
//! around a collection, which the API is known to produce in four shapes.

use serde_json::Value;

/// The four shapes a response body can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// An envelope with the collection under `results`.
    Results(Vec<Value>),
    /// An envelope with the collection under `data`.
    Data(Vec<Value>),
    /// A bare JSON array.
    Sequence(Vec<Value>),
    /// A bare object, treated as a one-element collection.
    ///
    /// The API has been observed returning this even from list endpoints;
    /// the fallback is preserved as-is and deliberately not extended.
    Single(Value),
}

impl ResponseShape {
    /// Classifies a decoded response body. `results` wins over `data`; a
    /// non-array value under either key falls through to the next case.
    pub fn classify(response: &Value) -> ResponseShape {
        if let Some(results) = response.get("results").and_then(Value::as_array) {
            return ResponseShape::Results(results.clone());
        }
        if let Some(data) = response.get("data").and_then(Value::as_array) {
            return ResponseShape::Data(data.clone());
        }
        if let Some(items) = response.as_array() {
            return ResponseShape::Sequence(items.clone());
        }
        ResponseShape::Single(response.clone())
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            ResponseShape::Results(records)
            | ResponseShape::Data(records)
            | ResponseShape::Sequence(records) => records,
            ResponseShape::Single(record) => vec![record],
        }
    }
}

/// Extracts the uniform record sequence from a raw API response. Total:
/// every JSON value yields a sequence.
pub fn extract_records(response: &Value) -> Vec<Value> {
    ResponseShape::classify(response).into_records()
}

/// Display form of a record attribute: strings are unquoted, scalars use
/// their JSON text, composites are rendered as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a record attribute as display text; `None` when absent or null.
pub fn record_text(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .filter(|value| !value.is_null())
        .map(display_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn results_envelope_is_unwrapped() {
        let response = json!({"results": [{"id": "a"}, {"id": "b"}], "total": 2});
        assert_eq!(
            extract_records(&response),
            vec![json!({"id": "a"}), json!({"id": "b"})]
        );
    }

    #[test]
    fn data_envelope_is_unwrapped() {
        let response = json!({"data": [{"id": "a"}]});
        assert_eq!(extract_records(&response), vec![json!({"id": "a"})]);
    }

    #[test]
    fn results_wins_over_data() {
        let response = json!({"results": [{"id": "r"}], "data": [{"id": "d"}]});
        assert_eq!(extract_records(&response), vec![json!({"id": "r"})]);
    }

    #[test]
    fn bare_sequence_is_taken_verbatim() {
        let response = json!([{"id": "a"}, {"id": "b"}]);
        assert_eq!(
            ResponseShape::classify(&response),
            ResponseShape::Sequence(vec![json!({"id": "a"}), json!({"id": "b"})])
        );
    }

    #[test]
    fn bare_object_becomes_single_element_sequence() {
        let response = json!({"id": "a", "name": "North"});
        assert_eq!(extract_records(&response), vec![response.clone()]);
    }

    #[test]
    fn non_array_envelope_value_falls_through() {
        // a `results` key holding a scalar is not an envelope
        let response = json!({"results": 5});
        assert_eq!(extract_records(&response), vec![response.clone()]);
    }

    #[test]
    fn extraction_is_total_for_scalars() {
        assert_eq!(extract_records(&json!(42)), vec![json!(42)]);
        assert_eq!(extract_records(&json!(null)), vec![json!(null)]);
    }

    #[test]
    fn display_text_unquotes_strings() {
        assert_eq!(display_text(&json!("North Field")), "North Field");
        assert_eq!(display_text(&json!(120.5)), "120.5");
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn record_text_skips_null_and_missing() {
        let record = json!({"id": "f1", "farmId": null});
        assert_eq!(record_text(&record, "id"), Some("f1".to_string()));
        assert_eq!(record_text(&record, "farmId"), None);
        assert_eq!(record_text(&record, "acres"), None);
    }
}
