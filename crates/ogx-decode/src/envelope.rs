//! Wire envelopes the read API wraps values in.
//!
//! Two shapes exist:
//! - a typed envelope `{ "typeUrl": "...", "value": ... }` naming a
//!   well-known wrapper type, and
//! - a protobuf `Value` tagged union with exactly one of `stringValue`,
//!   `numberValue`, `boolValue`, `nullValue`, `structValue`, `listValue`.
//!
//! [`Envelope::classify`] derives the discriminant from field presence once;
//! everything downstream is a `match`.

use serde_json::{Map, Value};

/// Wrapper type named by an envelope's `typeUrl`, matched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    /// `StringValue`: the value is hex-encoded UTF-8.
    String,
    /// `Int32Value`, `Int64Value`, `UInt*Value`, `FloatValue`, `DoubleValue`.
    Numeric,
    /// `BoolValue`.
    Bool,
    /// `Struct`: the value is a nested object.
    Struct,
    Unrecognized,
}

impl WrapperKind {
    #[must_use]
    pub fn from_type_url(type_url: &str) -> Self {
        if type_url.contains("StringValue") {
            Self::String
        } else if ["Int", "Float", "Double"].iter().any(|t| type_url.contains(t)) {
            Self::Numeric
        } else if type_url.contains("BoolValue") {
            Self::Bool
        } else if type_url.contains("Struct") {
            Self::Struct
        } else {
            Self::Unrecognized
        }
    }
}

/// Payload of a protobuf `Value` tagged union.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggedValue<'a> {
    String(&'a Value),
    Number(&'a Value),
    Bool(&'a Value),
    Null,
    Struct(&'a Value),
    List(&'a Value),
    /// A tag key is present but carries nothing usable (e.g. `structValue: null`).
    Opaque,
}

/// A recognized envelope, borrowed from the payload it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
    Typed { kind: WrapperKind, value: &'a Value },
    Tagged(TaggedValue<'a>),
}

const TAG_KEYS: [&str; 6] = [
    "stringValue",
    "numberValue",
    "boolValue",
    "structValue",
    "listValue",
    "nullValue",
];

impl<'a> Envelope<'a> {
    /// Classify a JSON value. Typed envelopes win over tagged unions; any
    /// other shape is `None`.
    #[must_use]
    pub fn classify(value: &'a Value) -> Option<Self> {
        let map = value.as_object()?;
        Self::classify_object(map)
    }

    #[must_use]
    pub fn classify_object(map: &'a Map<String, Value>) -> Option<Self> {
        if let (Some(Value::String(type_url)), Some(inner)) = (map.get("typeUrl"), map.get("value"))
        {
            return Some(Self::Typed {
                kind: WrapperKind::from_type_url(type_url),
                value: inner,
            });
        }

        if !TAG_KEYS.iter().any(|key| map.contains_key(*key)) {
            return None;
        }

        let tagged = if let Some(v) = map.get("stringValue") {
            TaggedValue::String(v)
        } else if let Some(v) = map.get("numberValue") {
            TaggedValue::Number(v)
        } else if let Some(v) = map.get("boolValue") {
            TaggedValue::Bool(v)
        } else if map.contains_key("nullValue") {
            TaggedValue::Null
        } else if let Some(v) = map.get("structValue").filter(|v| is_truthy(v)) {
            TaggedValue::Struct(v)
        } else if let Some(v) = map.get("listValue").filter(|v| is_truthy(v)) {
            TaggedValue::List(v)
        } else {
            TaggedValue::Opaque
        };
        Some(Self::Tagged(tagged))
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("type.googleapis.com/google.protobuf.StringValue", WrapperKind::String)]
    #[case("type.googleapis.com/google.protobuf.Int64Value", WrapperKind::Numeric)]
    #[case("type.googleapis.com/google.protobuf.UInt32Value", WrapperKind::Numeric)]
    #[case("type.googleapis.com/google.protobuf.DoubleValue", WrapperKind::Numeric)]
    #[case("type.googleapis.com/google.protobuf.FloatValue", WrapperKind::Numeric)]
    #[case("type.googleapis.com/google.protobuf.BoolValue", WrapperKind::Bool)]
    #[case("type.googleapis.com/google.protobuf.Struct", WrapperKind::Struct)]
    #[case("type.googleapis.com/google.protobuf.Timestamp", WrapperKind::Unrecognized)]
    fn wrapper_kind_from_type_url(#[case] url: &str, #[case] expected: WrapperKind) {
        assert_eq!(WrapperKind::from_type_url(url), expected);
    }

    #[test]
    fn typed_envelope_needs_string_type_url_and_value() {
        let typed = json!({"typeUrl": "x.BoolValue", "value": "true"});
        assert!(matches!(
            Envelope::classify(&typed),
            Some(Envelope::Typed { kind: WrapperKind::Bool, .. })
        ));

        assert_eq!(Envelope::classify(&json!({"typeUrl": "x.BoolValue"})), None);
        assert_eq!(Envelope::classify(&json!({"typeUrl": 3, "value": 1})), None);
    }

    #[test]
    fn tagged_union_priority() {
        let both = json!({"numberValue": 1, "stringValue": "s"});
        assert!(matches!(
            Envelope::classify(&both),
            Some(Envelope::Tagged(TaggedValue::String(_)))
        ));

        let null_struct = json!({"structValue": null});
        assert_eq!(
            Envelope::classify(&null_struct),
            Some(Envelope::Tagged(TaggedValue::Opaque))
        );

        assert_eq!(
            Envelope::classify(&json!({"nullValue": "NULL_VALUE"})),
            Some(Envelope::Tagged(TaggedValue::Null))
        );
    }

    #[test]
    fn plain_values_are_not_envelopes() {
        assert_eq!(Envelope::classify(&json!({"value": "abc"})), None);
        assert_eq!(Envelope::classify(&json!("stringValue")), None);
        assert_eq!(Envelope::classify(&json!([{"stringValue": "x"}])), None);
    }
}
