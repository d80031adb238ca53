//! # ogx-decode
//!
//! Normalizes read API payloads into plain JSON.
//!
//! The read API mixes three encodings for the same data:
//! 1. typed envelopes `{typeUrl, value}` naming a protobuf wrapper type,
//! 2. protobuf `Value` tagged unions (`stringValue`, `structValue`, ...),
//! 3. hex strings holding a protobuf frame around an embedded JSON document.
//!
//! [`decode`] strips all three recursively and never fails: anything it
//! cannot interpret confidently is returned as it came in.
//!
//! ```
//! use serde_json::json;
//!
//! let wire = json!({"structValue": {"fields": {"k": {"stringValue": "v"}}}});
//! assert_eq!(ogx_decode::decode(&wire), json!({"k": "v"}));
//! ```

pub mod embedded;
pub mod envelope;
pub mod table;

pub use embedded::{extract_json_from_hex, find_embedded_json, hex_to_utf8, is_hex_string};
pub use envelope::{Envelope, TaggedValue, WrapperKind};
pub use table::{AttributeTable, decode_attribute_table};

use serde_json::{Map, Number, Value};

/// Marker added to an object whose hex `value` field was expanded.
pub const DECODED_MARKER: &str = "_decoded";

/// Recursively strip wire envelopes from `value`.
#[must_use]
pub fn decode(value: &Value) -> Value {
    match value {
        Value::String(s) => decode_string(s).unwrap_or_else(|| value.clone()),
        Value::Array(items) => Value::Array(items.iter().map(decode).collect()),
        Value::Object(map) => decode_object(map),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

/// True when `value` contains at least one envelope, tagged union, JSON
/// encoded envelope string, or hex string with an embedded document.
#[must_use]
pub fn contains_encoded_values(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            parse_envelope_string(s).is_some()
                || (is_hex_string(s) && extract_json_from_hex(s).is_some())
        }
        Value::Array(items) => items.iter().any(contains_encoded_values),
        Value::Object(map) => {
            Envelope::classify_object(map).is_some() || map.values().any(contains_encoded_values)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

fn decode_string(s: &str) -> Option<Value> {
    if let Some(unwrapped) = parse_envelope_string(s) {
        return Some(unwrapped);
    }
    if is_hex_string(s) {
        return extract_json_from_hex(s).map(|embedded| decode(&embedded));
    }
    None
}

/// A string holding a JSON-encoded typed envelope, unwrapped.
fn parse_envelope_string(s: &str) -> Option<Value> {
    if !s.trim_start().starts_with('{') {
        return None;
    }
    let parsed: Value = serde_json::from_str(s).ok()?;
    match Envelope::classify(&parsed)? {
        Envelope::Typed { kind, value } => Some(unwrap_typed(kind, value)),
        Envelope::Tagged(_) => None,
    }
}

fn decode_object(map: &Map<String, Value>) -> Value {
    if map.get(DECODED_MARKER) == Some(&Value::Bool(true)) {
        return Value::Object(map.clone());
    }

    match Envelope::classify_object(map) {
        Some(Envelope::Typed { kind, value }) => return unwrap_typed(kind, value),
        Some(Envelope::Tagged(tagged)) => return unwrap_tagged(tagged, map),
        None => {}
    }

    if let Some(expanded) = expand_hex_value_field(map) {
        return expanded;
    }

    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), decode(value)))
            .collect(),
    )
}

/// Attribute responses carry `{start, end, value: "<hex>"}`. When the hex
/// holds an embedded object or array, replace `value` with it and mark the
/// object. `start`/`end` are copied as-is.
fn expand_hex_value_field(map: &Map<String, Value>) -> Option<Value> {
    let Some(Value::String(raw)) = map.get("value") else {
        return None;
    };
    if !is_hex_string(raw) {
        return None;
    }

    let extracted = extract_json_from_hex(raw).filter(|v| v.is_object() || v.is_array());
    let Some(extracted) = extracted else {
        tracing::debug!(len = raw.len(), "hex value field has no embedded document, kept as-is");
        return None;
    };

    let mut out = Map::with_capacity(map.len() + 1);
    for (key, value) in map {
        let decoded = match key.as_str() {
            "value" => decode(&extracted),
            "start" | "end" => value.clone(),
            _ => decode(value),
        };
        out.insert(key.clone(), decoded);
    }
    out.insert(DECODED_MARKER.to_string(), Value::Bool(true));
    Some(Value::Object(out))
}

fn unwrap_typed(kind: WrapperKind, value: &Value) -> Value {
    match (kind, value) {
        (WrapperKind::String, Value::String(hex)) => {
            let text = hex_to_utf8(hex).unwrap_or_else(|| hex.clone());
            decode_string(&text).unwrap_or(Value::String(text))
        }
        (WrapperKind::Numeric, Value::String(s)) => {
            parse_number(s).map_or_else(|| value.clone(), Value::Number)
        }
        (WrapperKind::Bool, _) => Value::Bool(is_true_like(value)),
        (WrapperKind::Struct, Value::Object(_) | Value::Array(_) | Value::Null) => decode(value),
        (WrapperKind::Struct, _) => value.clone(),
        _ => decode(value),
    }
}

fn unwrap_tagged(tagged: TaggedValue<'_>, original: &Map<String, Value>) -> Value {
    match tagged {
        TaggedValue::String(v) => decode(v),
        TaggedValue::Number(v) | TaggedValue::Bool(v) => v.clone(),
        TaggedValue::Null => Value::Null,
        TaggedValue::Struct(sv) => match sv.get("fields") {
            Some(Value::Object(fields)) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), decode(value)))
                    .collect(),
            ),
            _ => decode(sv),
        },
        TaggedValue::List(lv) => match lv.get("values") {
            Some(Value::Array(values)) => Value::Array(values.iter().map(decode).collect()),
            _ => Value::Array(Vec::new()),
        },
        TaggedValue::Opaque => Value::Object(original.clone()),
    }
}

fn parse_number(s: &str) -> Option<Number> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i.into());
    }
    if let Ok(u) = s.parse::<u64>() {
        return Some(u.into());
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

/// `true`, `"true"` and `1` are true; everything else is false.
fn is_true_like(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        Value::Number(n) => {
            n.as_u64() == Some(1) || n.as_f64().is_some_and(|f| (f - 1.0).abs() < f64::EPSILON)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn envelope(type_name: &str, value: Value) -> Value {
        let type_url = format!("type.googleapis.com/google.protobuf.{type_name}");
        json!({"typeUrl": type_url, "value": value})
    }

    #[test]
    fn scalars_and_null_pass_through() {
        for v in [json!(null), json!(true), json!(3.5), json!("plain")] {
            assert_eq!(decode(&v), v);
        }
    }

    #[test]
    fn bool_envelope_accepts_true_forms() {
        assert_eq!(decode(&envelope("BoolValue", json!("true"))), json!(true));
        assert_eq!(decode(&envelope("BoolValue", json!(true))), json!(true));
        assert_eq!(decode(&envelope("BoolValue", json!(1))), json!(true));
        assert_eq!(decode(&envelope("BoolValue", json!("yes"))), json!(false));
        assert_eq!(decode(&envelope("BoolValue", json!(0))), json!(false));
    }

    #[test]
    fn string_envelope_hex_decodes() {
        let hello = hex::encode("hello");
        assert_eq!(decode(&envelope("StringValue", json!(hello))), json!("hello"));
    }

    #[test]
    fn numeric_envelopes_coerce_strings() {
        assert_eq!(decode(&envelope("Int64Value", json!("42"))), json!(42));
        assert_eq!(decode(&envelope("DoubleValue", json!("2.5"))), json!(2.5));
        assert_eq!(decode(&envelope("Int32Value", json!(7))), json!(7));
        assert_eq!(decode(&envelope("FloatValue", json!("n/a"))), json!("n/a"));
    }

    #[test]
    fn struct_envelope_recurses() {
        let wire = envelope("Struct", json!({"inner": {"numberValue": 3}}));
        assert_eq!(decode(&wire), json!({"inner": 3}));
    }

    #[test]
    fn json_string_holding_envelope_is_unwrapped() {
        let encoded = envelope("StringValue", json!("4865616c7468")).to_string();
        let wire = json!({ "name": encoded });
        assert_eq!(decode(&wire), json!({"name": "Health"}));
    }

    #[test]
    fn tagged_struct_and_list_unwrap() {
        let s = json!({"structValue": {"fields": {"k": {"stringValue": "v"}}}});
        assert_eq!(decode(&s), json!({"k": "v"}));

        let l = json!({"listValue": {"values": [{"numberValue": 1}, {"numberValue": 2}]}});
        assert_eq!(decode(&l), json!([1, 2]));

        assert_eq!(decode(&json!({"listValue": {}})), json!([]));
        assert_eq!(decode(&json!({"nullValue": 0})), json!(null));
    }

    #[test]
    fn hex_string_with_embedded_json_is_extracted() {
        let wire = json!(hex::encode(b"xx{\"a\":1}yy"));
        assert_eq!(decode(&wire), json!({"a": 1}));
    }

    #[test]
    fn hex_string_without_json_is_kept() {
        let raw = hex::encode(b"definitely not json at all");
        assert_eq!(decode(&json!(raw.clone())), json!(raw));
    }

    #[test]
    fn attribute_value_field_is_expanded_and_marked() {
        let mut frame = vec![0x0a, 0x20];
        frame.extend_from_slice(br#"{"columns":["a"],"rows":[[1]]}"#);
        let wire = json!({
            "start": "2024-01-01T00:00:00Z",
            "end": "",
            "value": hex::encode(&frame),
        });

        assert_eq!(
            decode(&wire),
            json!({
                "start": "2024-01-01T00:00:00Z",
                "end": "",
                "value": {"columns": ["a"], "rows": [[1]]},
                "_decoded": true,
            })
        );
    }

    #[test]
    fn value_field_with_scalar_payload_is_not_expanded() {
        let wire = json!({"value": hex::encode(b"..\"just a string\"..")});
        assert_eq!(decode(&wire), wire);
    }

    #[test]
    fn unrecognized_typed_envelope_yields_value() {
        let wire = envelope("Timestamp", json!({"seconds": {"numberValue": 5}}));
        assert_eq!(decode(&wire), json!({"seconds": 5}));
    }

    #[test]
    fn arrays_and_nested_objects_recurse() {
        let wire = json!({
            "items": [
                {"stringValue": "a"},
                envelope("BoolValue", json!("true")),
                {"plain": {"numberValue": 9}},
            ]
        });
        assert_eq!(decode(&wire), json!({"items": ["a", true, {"plain": 9}]}));
    }

    #[test]
    fn detects_encoded_values() {
        assert!(contains_encoded_values(&json!({"a": [{"boolValue": true}]})));
        assert!(contains_encoded_values(&envelope("StringValue", json!("00"))));
        assert!(contains_encoded_values(&json!([hex::encode(b"....[1,2,3]...")])));
        assert!(contains_encoded_values(&json!(
            r#"{"typeUrl":"x.Int64Value","value":"3"}"#
        )));

        assert!(!contains_encoded_values(&json!({"a": [1, "two", null]})));
        assert!(!contains_encoded_values(&json!(hex::encode(b"no documents in here"))));
    }

    #[test]
    fn decoded_output_has_no_encoded_values() {
        let wire = json!({
            "fields": {"structValue": {"fields": {
                "x": {"listValue": {"values": [{"stringValue": "y"}]}}
            }}},
            "value": hex::encode(b"\x0a\x07{\"k\":[]}"),
        });
        assert!(contains_encoded_values(&wire));
        assert!(!contains_encoded_values(&decode(&wire)));
    }
}
