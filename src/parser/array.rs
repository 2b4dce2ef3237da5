use serde_json::Value as JsonValue;

use super::*;
use crate::ast::{Section, Value};
use crate::typed::cast_item_value;

/// Build a [`Document`] from an already-decoded `section -> {key -> value}` mapping.
///
/// Strings go through [`cast_item_value`]; numbers, booleans and null keep
/// their type. Arrays become lists, and a nested object becomes a list of
/// its values in order. An empty array counts as an empty mapping, both for
/// the whole input and for a section.
///
/// # Examples
/// ```
/// use ini_cfg::{parse_array, Value};
/// use serde_json::json;
///
/// let doc = parse_array(&json!({"a": {"key": "val-a"}})).unwrap();
/// assert_eq!(doc.get("a", "key"), Some(&Value::String("val-a".into())));
///
/// assert!(parse_array(&json!(["a", "b", "c"])).is_err());
/// ```
pub fn parse_array(input: &JsonValue) -> Result<Document, IniError> {
    let sections = match input {
        JsonValue::Object(map) => map,
        JsonValue::Array(items) if items.is_empty() => return Ok(Document::new()),
        other => {
            return Err(IniError::InvalidData {
                message: format!(
                    "Expected a mapping of section names to item mappings, got {}",
                    json_kind(other)
                ),
                line: 0,
                hint: Some("Shape the input as {\"section\": {\"key\": value}}".into()),
                code: Some(207),
            });
        }
    };

    let mut document = Document::new();
    for (section_name, items) in sections {
        ensure_valid_name(section_name, None, 0)?;

        let mut section = Section::new(section_name.as_str());
        match items {
            JsonValue::Object(items) => {
                for (key, raw) in items {
                    ensure_valid_name(key, Some(section_name.as_str()), 0)?;
                    section.insert(key.as_str(), json_to_value(raw));
                }
            }
            JsonValue::Array(empty) if empty.is_empty() => {}
            other => {
                return Err(IniError::InvalidData {
                    message: format!(
                        "Section '{}' must map to a mapping of items, got {}",
                        section_name,
                        json_kind(other)
                    ),
                    line: 0,
                    hint: Some("Top-level entries are sections; put scalars inside a section".into()),
                    code: Some(207),
                });
            }
        }
        document.insert_section(section);
    }

    tracing::debug!(sections = document.len(), "Parsed section mapping");
    Ok(document)
}

fn json_to_value(raw: &JsonValue) -> Value {
    match raw {
        JsonValue::String(s) => cast_item_value(s),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or_else(|| Value::String(n.to_string())),
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Null => Value::Null,
        JsonValue::Array(items) => Value::List(items.iter().map(json_to_value).collect()),
        JsonValue::Object(map) => Value::List(map.values().map(json_to_value).collect()),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "a mapping",
    }
}
