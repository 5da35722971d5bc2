//! Person column value logic.
//!
//! Implements the assign/unassign decision for a monday.com person column:
//! - normalizing the column value a webhook event carries
//! - classifying that value as empty or not
//! - building the outbound `personsAndTeams` column value

use serde_json::{json, Map, Value};

/// Decode a column value that monday delivered as a JSON-encoded string.
///
/// Some column types arrive as a string containing JSON. Decode failures are
/// a normal branch, not an error: the raw string is kept and classified by
/// the string rule.
pub fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(decoded) => decoded,
            Err(_) => Value::String(raw),
        },
        other => other,
    }
}

/// Classify a column value as empty (unassign) or not (assign).
///
/// Status/label columns report `{"label": {"text": ...}}`; a label whose
/// display text is blank counts as empty even when the object carries other
/// keys such as an index.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => match label_text(map) {
            Some(text) => text.trim().is_empty(),
            None => map.is_empty(),
        },
        Value::Array(items) => items.is_empty(),
        Value::Number(_) | Value::Bool(_) => false,
    }
}

fn label_text(map: &Map<String, Value>) -> Option<&str> {
    map.get("label")?.get("text")?.as_str()
}

/// Coerce a webhook id to the string form the mutation variables expect.
///
/// Absent, null, zero, and empty-string ids all count as missing; events
/// without full context are ignored rather than rejected.
pub fn id_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Build the person column value for the mutation.
///
/// `user_id` is embedded exactly as the event delivered it (the platform
/// sends numeric ids and expects them back unchanged).
pub fn person_column_value(user_id: &Value, empty: bool) -> Value {
    if empty {
        json!({ "personsAndTeams": [] })
    } else {
        json!({ "personsAndTeams": [{ "id": user_id, "kind": "person" }] })
    }
}
