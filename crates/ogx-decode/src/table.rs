//! Tabular view of decoded attribute payloads.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::envelope::is_truthy;

/// Columns and rows pulled out of an attribute value, plus the value they
/// came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub raw: Value,
}

impl AttributeTable {
    fn raw_only(raw: Value) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            raw,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

/// Build a table from an already decoded attribute response.
///
/// The first entry carrying a `value` (of a top-level array, or of an
/// object's `values` array) is interpreted as either a `columns`/`rows`
/// document or a protobuf `fields` map. Anything else produces an empty table
/// around the raw data. Falsy input produces no table.
#[must_use]
pub fn decode_attribute_table(data: &Value) -> Option<AttributeTable> {
    if !is_truthy(data) {
        return None;
    }

    let first_value = match data {
        Value::Array(items) => first_entry_value(items),
        Value::Object(map) => match map.get("values") {
            Some(Value::Array(values)) => first_entry_value(values),
            _ => None,
        },
        _ => None,
    };

    Some(first_value.map_or_else(|| AttributeTable::raw_only(data.clone()), parse_struct_value))
}

fn first_entry_value(items: &[Value]) -> Option<&Value> {
    items.first()?.as_object()?.get("value")
}

fn parse_struct_value(value: &Value) -> AttributeTable {
    let Some(obj) = value.as_object() else {
        return AttributeTable::raw_only(value.clone());
    };

    if let (Some(columns), Some(rows)) = (obj.get("columns"), obj.get("rows")) {
        return AttributeTable {
            columns: columns
                .as_array()
                .map(|cols| cols.iter().map(cell_to_string).collect())
                .unwrap_or_default(),
            rows: rows
                .as_array()
                .map(|rows| rows.iter().map(row_cells).collect())
                .unwrap_or_default(),
            raw: value.clone(),
        };
    }

    if let Some(Value::Object(fields)) = obj.get("fields") {
        return fields_table(fields, value);
    }

    AttributeTable::raw_only(value.clone())
}

fn fields_table(fields: &Map<String, Value>, raw: &Value) -> AttributeTable {
    let columns: Vec<String> = fields.keys().cloned().collect();
    let row = fields.values().map(extract_field_value).collect();
    AttributeTable {
        columns,
        rows: vec![row],
        raw: raw.clone(),
    }
}

fn extract_field_value(field: &Value) -> Value {
    let Some(f) = field.as_object() else {
        return field.clone();
    };

    for key in ["stringValue", "numberValue", "boolValue"] {
        if let Some(v) = f.get(key) {
            return v.clone();
        }
    }
    if let Some(list) = f.get("listValue") {
        return match list.get("values") {
            Some(Value::Array(values)) => {
                Value::Array(values.iter().map(extract_field_value).collect())
            }
            _ => Value::Array(Vec::new()),
        };
    }
    if let Some(sv) = f.get("structValue") {
        return sv.clone();
    }
    field.clone()
}

fn row_cells(row: &Value) -> Vec<Value> {
    match row {
        Value::Array(cells) => cells.clone(),
        other => vec![other.clone()],
    }
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn columns_and_rows_from_array_response() {
        let data = json!([{
            "start": "2024",
            "value": {"columns": ["name", 2], "rows": [["a", 1], ["b", 2]]},
        }]);
        let table = decode_attribute_table(&data).unwrap();
        assert_eq!(table.columns, vec!["name", "2"]);
        assert_eq!(table.rows, vec![vec![json!("a"), json!(1)], vec![json!("b"), json!(2)]]);
    }

    #[test]
    fn struct_fields_become_single_row() {
        let data = json!({"values": [{"value": {"fields": {
            "ministry": {"stringValue": "Health"},
            "budget": {"numberValue": 12.5},
            "tags": {"listValue": {"values": [{"stringValue": "x"}, {"boolValue": true}]}},
        }}}]});
        let table = decode_attribute_table(&data).unwrap();
        assert_eq!(table.columns, vec!["ministry", "budget", "tags"]);
        assert_eq!(table.rows, vec![vec![json!("Health"), json!(12.5), json!(["x", true])]]);
    }

    #[test]
    fn unrecognized_shapes_keep_raw() {
        let data = json!({"something": "else"});
        let table = decode_attribute_table(&data).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.raw, data);

        let table = decode_attribute_table(&json!([{"value": "scalar"}])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.raw, json!("scalar"));
    }

    #[test]
    fn null_is_no_table() {
        assert_eq!(decode_attribute_table(&Value::Null), None);
    }
}
