//! Pull typed records out of decoded read API responses.

use ogx_core::{EntityInfo, EntityKind, RelationResult};
use serde_json::Value;

/// Depth-first search for the record of `target_id` anywhere in `data`.
///
/// A record is an object whose `id` equals `target_id` and which carries a
/// `name` or a `kind`. A missing name falls back to the id and a missing or
/// malformed kind becomes `UNKNOWN`.
#[must_use]
pub fn find_entity(data: &Value, target_id: &str) -> Option<EntityInfo> {
    match data {
        Value::Array(items) => items.iter().find_map(|item| find_entity(item, target_id)),
        Value::Object(obj) => {
            let is_target = obj.get("id").and_then(Value::as_str) == Some(target_id)
                && (obj.contains_key("name") || obj.contains_key("kind"));
            if is_target {
                return Some(entity_from_record(obj, target_id));
            }
            obj.values().find_map(|value| find_entity(value, target_id))
        }
        _ => None,
    }
}

fn entity_from_record(obj: &serde_json::Map<String, Value>, target_id: &str) -> EntityInfo {
    let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

    EntityInfo {
        id: target_id.to_string(),
        name: text("name")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| target_id.to_string()),
        kind: obj
            .get("kind")
            .cloned()
            .and_then(|kind| serde_json::from_value::<EntityKind>(kind).ok())
            .unwrap_or_else(EntityKind::unknown),
        created: text("created").unwrap_or_default(),
        terminated: text("terminated"),
    }
}

/// Relations arrive either as a bare array or as `{relations: [...]}`.
/// Entries that do not look like relations are skipped.
#[must_use]
pub fn relations_from_response(data: Value) -> Vec<RelationResult> {
    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("relations") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(relation) => Some(relation),
            Err(error) => {
                tracing::debug!(%error, "skipping malformed relation entry");
                None
            }
        })
        .collect()
}
