//! Firestore typed-value mapping
//!
//! Firestore's REST API wraps every field in a typed envelope
//! (`{"stringValue": ...}`, `{"integerValue": "42"}`, ...). This module
//! converts between plain `serde_json::Value` documents and that envelope.
//! Integers are string-encoded on the wire; both string and numeric forms
//! are accepted when reading. Timestamps read back as plain strings.

use serde_json::{json, Map, Value};

/// Encode a plain JSON value as a Firestore typed value.
pub fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": to_firestore_fields(map) } }),
    }
}

/// Encode a JSON object as a Firestore `fields` map.
pub fn to_firestore_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map
        .iter()
        .map(|(k, v)| (k.clone(), to_firestore_value(v)))
        .collect();
    Value::Object(fields)
}

/// Decode one Firestore typed value into plain JSON.
pub fn from_firestore_value(value: &Value) -> Value {
    let Some(map) = value.as_object() else {
        return Value::Null;
    };

    if map.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(b) = map.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(b);
    }
    if let Some(v) = map.get("integerValue") {
        // String-encoded on the wire, but tolerate a bare number.
        let parsed = match v {
            Value::String(s) => s.parse::<i64>().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
        if let Some(i) = parsed {
            return json!(i);
        }
        return Value::Null;
    }
    if let Some(n) = map.get("doubleValue").and_then(Value::as_f64) {
        return serde_json::Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null);
    }
    if let Some(s) = map.get("stringValue").and_then(Value::as_str) {
        return Value::String(s.to_string());
    }
    if let Some(s) = map.get("timestampValue").and_then(Value::as_str) {
        return Value::String(s.to_string());
    }
    if let Some(array) = map.get("arrayValue").and_then(Value::as_object) {
        let values = array
            .get("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(from_firestore_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(inner) = map.get("mapValue").and_then(Value::as_object) {
        let fields = inner
            .get("fields")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        return from_firestore_fields(&fields);
    }

    Value::Null
}

/// Decode a Firestore `fields` map into a JSON object.
pub fn from_firestore_fields(fields: &Map<String, Value>) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.clone(), from_firestore_value(v)))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_round_trip() {
        for value in [
            Value::Null,
            json!(true),
            json!(-42),
            json!(2.5),
            json!("hello"),
        ] {
            let encoded = to_firestore_value(&value);
            assert_eq!(from_firestore_value(&encoded), value);
        }
    }

    #[test]
    fn test_integer_is_string_encoded_on_wire() {
        let encoded = to_firestore_value(&json!(40));
        assert_eq!(encoded, json!({ "integerValue": "40" }));
    }

    #[test]
    fn test_bare_number_integer_is_accepted_when_reading() {
        let wire = json!({ "integerValue": 7 });
        assert_eq!(from_firestore_value(&wire), json!(7));
    }

    #[test]
    fn test_timestamp_reads_as_string() {
        let wire = json!({ "timestampValue": "2026-02-15T00:00:00Z" });
        assert_eq!(from_firestore_value(&wire), json!("2026-02-15T00:00:00Z"));
    }

    #[test]
    fn test_record_document_round_trip() {
        let document = json!({
            "topic": "T",
            "category": "History",
            "summary": "S",
            "keyFacts": ["a", "b", "c", "d", "e"],
            "reflection": "R",
            "nested": { "count": 5, "ok": true }
        });
        let fields = to_firestore_fields(document.as_object().unwrap());
        let decoded = from_firestore_fields(fields.as_object().unwrap());
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_empty_array_and_map() {
        let document = json!({ "facts": [], "meta": {} });
        let fields = to_firestore_fields(document.as_object().unwrap());
        let decoded = from_firestore_fields(fields.as_object().unwrap());
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_unknown_typed_value_decodes_to_null() {
        let wire = json!({ "geoPointValue": { "latitude": 1.0, "longitude": 2.0 } });
        assert_eq!(from_firestore_value(&wire), Value::Null);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// JSON values limited to what daily-content documents contain:
    /// strings, i64 integers, booleans, nulls, arrays, shallow maps.
    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,20}".prop_map(Value::from),
        ]
    }

    fn json_document() -> impl Strategy<Value = Value> {
        let leaf = json_leaf();
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..4).prop_map(|m| {
                    Value::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    proptest! {
        /// Any document shape we persist survives the typed-value envelope.
        #[test]
        fn prop_document_round_trip(value in json_document()) {
            let encoded = to_firestore_value(&value);
            prop_assert_eq!(from_firestore_value(&encoded), value);
        }
    }
}
