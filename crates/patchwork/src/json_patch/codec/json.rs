//! JSON codec for JSON Patch operations.
//!
//! Converts steps to and from `serde_json::Value` in RFC 6902 format.
//! Members an operation does not use are ignored on decode and omitted on
//! encode.

use patchwork_json_pointer::{format_json_pointer, try_parse_json_pointer};
use patchwork_util::JsonValue;
use serde_json::{Map, Value};

use crate::json_patch::types::{PatchError, PatchOperation, PatchStep, Path};

// ── Path helpers ──────────────────────────────────────────────────────────

fn decode_path(obj: &Map<String, Value>, key: &str) -> Result<Path, PatchError> {
    let pointer = obj
        .get(key)
        .ok_or_else(|| PatchError::InvalidPatch(format!("missing '{key}' field")))?
        .as_str()
        .ok_or_else(|| PatchError::InvalidPatch(format!("'{key}' must be a string")))?;
    Ok(try_parse_json_pointer(pointer)?)
}

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation object.
///
/// # Errors
///
/// - `InvalidPatch` - not an object, unknown or missing `op`, or a missing
///   `path`, `from` or `value` the operation requires
/// - `InvalidPointerToken` - `path` or `from` is not a well-formed pointer
pub fn from_json(v: &Value) -> Result<PatchStep, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidPatch("operation must be an object".into()))?;
    let operation: PatchOperation = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidPatch("missing 'op' field".into()))?
        .parse()?;
    let path = decode_path(obj, "path")?;

    let from = if operation.takes_from() {
        Some(decode_path(obj, "from")?)
    } else {
        None
    };
    let value = if operation.takes_value() {
        let value = obj.get("value").ok_or_else(|| {
            PatchError::InvalidPatch(format!("{operation} requires 'value'"))
        })?;
        Some(JsonValue::from(value.clone()))
    } else {
        None
    };

    Ok(PatchStep {
        operation,
        path,
        from,
        value,
    })
}

/// Deserialize a patch document: an array of operation objects.
pub fn from_json_patch(v: &Value) -> Result<Vec<PatchStep>, PatchError> {
    v.as_array()
        .ok_or_else(|| PatchError::InvalidPatch("patch must be an array".into()))?
        .iter()
        .map(from_json)
        .collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a step to its RFC 6902 object form.
pub fn to_json(step: &PatchStep) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), Value::from(step.operation.as_str()));
    m.insert("path".into(), encode_path(&step.path));
    if let Some(from) = &step.from {
        m.insert("from".into(), encode_path(from));
    }
    if let Some(value) = &step.value {
        m.insert("value".into(), Value::from(value));
    }
    Value::Object(m)
}

pub fn to_json_patch(steps: &[PatchStep]) -> Value {
    Value::Array(steps.iter().map(to_json).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────
