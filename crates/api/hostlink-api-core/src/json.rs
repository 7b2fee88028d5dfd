//! Conversion between shorthand JSON and the canonical tagged form used by
//! the serde derives on [`Value`].
//!
//! Embedders and fixtures often write values in shorthand: `1.0`, `true`,
//! `[0, 1, 0]` or `{ "vec3": [1, 2, 3] }`. `normalize_value_json` rewrites
//! those into `{ "type": ..., "data": ... }` and `parse_value` goes the rest
//! of the way to a typed [`Value`].

use serde_json::{json, Value as JsonValue};
use thiserror::Error;

use crate::Value;

/// Errors produced while converting value JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("value json parse error: {0}")]
    Parse(String),
}

/// Shorthand object keys that map directly onto a tagged type.
const ALIASES: &[&str] = &[
    "bool",
    "int",
    "float",
    "vec2",
    "vec3",
    "vec4",
    "color_rgba",
    "matrix",
    "text",
    "string_array",
    "float_array",
];

/// Normalize shorthand `Value` JSON into the canonical tagged representation.
/// Objects already carrying `type`/`data` pass through unchanged.
pub fn normalize_value_json(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(n) => json!({ "type": "float", "data": n }),
        JsonValue::Bool(b) => json!({ "type": "bool", "data": b }),
        JsonValue::String(s) => json!({ "type": "text", "data": s }),
        JsonValue::Array(arr) => {
            let all_numbers = arr.iter().all(|x| x.is_number());
            if all_numbers {
                match arr.len() {
                    2 => json!({ "type": "vec2", "data": arr }),
                    3 => json!({ "type": "vec3", "data": arr }),
                    4 => json!({ "type": "vec4", "data": arr }),
                    16 => json!({ "type": "matrix", "data": arr }),
                    _ => json!({ "type": "float_array", "data": arr }),
                }
            } else if arr.iter().all(|x| x.is_string()) {
                json!({ "type": "string_array", "data": arr })
            } else {
                JsonValue::Array(arr)
            }
        }
        JsonValue::Object(obj) => {
            if obj.contains_key("type") && obj.contains_key("data") {
                return JsonValue::Object(obj);
            }
            for alias in ALIASES {
                if let Some(data) = obj.get(*alias) {
                    return json!({ "type": alias, "data": data });
                }
            }
            // "color" is accepted as a friendlier spelling of color_rgba.
            if let Some(data) = obj.get("color") {
                return json!({ "type": "color_rgba", "data": data });
            }
            // Enum shorthand: { "enum": { "index": 1, "label": "world" } }
            if let Some(data) = obj.get("enum") {
                return json!({ "type": "enum", "data": data });
            }
            JsonValue::Object(obj)
        }
        other => other,
    }
}

/// Parse arbitrary value JSON (shorthand or tagged) into a typed [`Value`].
pub fn parse_value(value: JsonValue) -> Result<Value, JsonError> {
    let normalized = normalize_value_json(value);
    serde_json::from_value(normalized).map_err(|e| JsonError::Parse(e.to_string()))
}
