//! Persistent JSON Patch (RFC 6902).
//!
//! Documents are immutable [`JsonValue`](patchwork_util::JsonValue) trees.
//! Applying a patch returns a new root that shares every untouched subtree
//! with the input, so earlier versions stay valid and cheap to keep.
//!
//! # Example
//!
//! ```
//! use patchwork::json_patch::{apply, from_json_patch};
//! use patchwork_util::JsonValue;
//! use serde_json::json;
//!
//! let doc = JsonValue::from(json!({"foo": ["bar", "baz"]}));
//! let patch = from_json_patch(&json!([
//!     {"op": "add", "path": "/foo/1", "value": "qux"},
//!     {"op": "test", "path": "/foo/2", "value": "baz"}
//! ]))
//! .unwrap();
//!
//! let next = apply(&doc, &patch).unwrap();
//! assert_eq!(next, JsonValue::from(json!({"foo": ["bar", "qux", "baz"]})));
//! assert_eq!(doc, JsonValue::from(json!({"foo": ["bar", "baz"]})));
//! ```

pub mod json_cli;
pub mod json_patch;
