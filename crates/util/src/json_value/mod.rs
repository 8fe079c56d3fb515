//! Immutable JSON value tree.
//!
//! A [`JsonValue`] is a cheap-to-clone handle to a reference-counted
//! [`JsonNode`]. Nodes are never mutated after construction, so two trees can
//! share any number of subtrees: producing an edited document only allocates
//! the containers on the edited path and reuses every other handle.
//!
//! # Example
//!
//! ```
//! use patchwork_util::JsonValue;
//! use serde_json::json;
//!
//! let doc = JsonValue::from(json!({"foo": [1, 2, 3]}));
//! let alias = doc.clone();
//! assert!(JsonValue::ptr_eq(&doc, &alias));
//! assert_eq!(doc.get_key("foo").and_then(|v| v.get_index(1)), Some(&JsonValue::from(2)));
//! ```

mod convert;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Number;

use crate::json_equal::deep_equal;

/// Object members in insertion order.
pub type Map = IndexMap<String, JsonValue>;

/// The closed set of JSON node variants.
#[derive(Debug)]
pub enum JsonNode {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(Map),
}

/// Shared handle to an immutable JSON node.
///
/// `Clone` copies the handle, not the tree. Equality (`==`) is structural, see
/// [`deep_equal`]; use [`JsonValue::ptr_eq`] for reference identity.
#[derive(Clone)]
pub struct JsonValue(Arc<JsonNode>);

impl JsonValue {
    pub fn new(node: JsonNode) -> Self {
        JsonValue(Arc::new(node))
    }

    pub fn null() -> Self {
        JsonValue::new(JsonNode::Null)
    }

    pub fn array(items: Vec<JsonValue>) -> Self {
        JsonValue::new(JsonNode::Array(items))
    }

    pub fn object(members: Map) -> Self {
        JsonValue::new(JsonNode::Object(members))
    }

    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(a: &JsonValue, b: &JsonValue) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn node(&self) -> &JsonNode {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        matches!(self.node(), JsonNode::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.node() {
            JsonNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self.node() {
            JsonNode::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.node() {
            JsonNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self.node() {
            JsonNode::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self.node() {
            JsonNode::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Member lookup; `None` for missing keys and non-objects.
    pub fn get_key(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Element lookup; `None` for out-of-range indexes and non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Converts the tree into an owned `serde_json::Value`.
    pub fn to_serde(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.node(), f)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::null()
    }
}
