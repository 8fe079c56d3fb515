#![allow(dead_code)]

use patchwork::json_patch::{apply, from_json_patch, PatchError};
use patchwork_json_pointer::{get, parse_json_pointer, Path};
use patchwork_util::{JsonValue, Map};
use proptest::prelude::*;
use serde_json::Value;

pub fn doc(value: Value) -> JsonValue {
    JsonValue::from(value)
}

pub fn path(pointer: &str) -> Path {
    parse_json_pointer(pointer)
}

/// Decodes `patch` and applies it to `document`.
pub fn run(document: &JsonValue, patch: Value) -> Result<JsonValue, PatchError> {
    let steps = from_json_patch(&patch)?;
    apply(document, &steps)
}

pub fn at<'a>(document: &'a JsonValue, pointer: &[String]) -> &'a JsonValue {
    get(document, pointer).unwrap_or_else(|| panic!("no value at {pointer:?}"))
}

/// Every path that addresses an existing value, root first.
pub fn all_paths(document: &JsonValue) -> Vec<Path> {
    let mut out = Vec::new();
    collect_paths(document, &mut Vec::new(), &mut out);
    out
}

fn collect_paths(value: &JsonValue, prefix: &mut Path, out: &mut Vec<Path>) {
    out.push(prefix.clone());
    if let Some(items) = value.as_array() {
        for (index, item) in items.iter().enumerate() {
            prefix.push(index.to_string());
            collect_paths(item, prefix, out);
            prefix.pop();
        }
    } else if let Some(members) = value.as_object() {
        for (key, member) in members {
            prefix.push(key.clone());
            collect_paths(member, prefix, out);
            prefix.pop();
        }
    }
}

// ── Generators ────────────────────────────────────────────────────────────

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}",
        Just("a/b".to_string()),
        Just("m~n".to_string()),
        Just("-".to_string()),
        Just(String::new()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::null()),
        any::<bool>().prop_map(JsonValue::from),
        any::<i64>().prop_map(JsonValue::from),
        (-1.0e6..1.0e6f64).prop_map(JsonValue::from),
        "[a-z ]{0,6}".prop_map(|s| JsonValue::from(s.as_str())),
    ]
}

/// Arbitrary documents up to a few levels deep.
pub fn arb_json() -> impl Strategy<Value = JsonValue> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|members| JsonValue::object(members.into_iter().collect::<Map>())),
        ]
    })
}

/// Arbitrary documents whose root is an object.
pub fn arb_object() -> impl Strategy<Value = JsonValue> {
    prop::collection::vec((arb_key(), arb_json()), 0..6)
        .prop_map(|members| JsonValue::object(members.into_iter().collect::<Map>()))
}
