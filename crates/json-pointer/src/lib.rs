//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements helper functions for [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! over the immutable [`JsonValue`](patchwork_util::JsonValue) tree: token
//! escaping, parsing and formatting, validation, and slot resolution for
//! JSON Patch operations.
//!
//! # Example
//!
//! ```
//! use patchwork_json_pointer::{format_json_pointer, get, parse_json_pointer};
//! use patchwork_util::JsonValue;
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! // Get a value from a JSON document
//! let doc = JsonValue::from(serde_json::json!({"foo": {"bar": 42}}));
//! assert_eq!(get(&doc, &path), Some(&JsonValue::from(42)));
//! ```

use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;

pub use get::get;
pub use resolve::resolve;
pub use types::{Access, Hop, Path, PathStep, Slot};
pub use util::{
    escape_component, format_json_pointer, is_valid_index, parse_json_pointer, starts_with,
    try_parse_json_pointer, unescape_component,
};
pub use validate::{validate_json_pointer, validate_path, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INDEX_OUT_OF_BOUNDS")]
    IndexOutOfBounds,
    #[error("INVALID_TOKEN: {0}")]
    InvalidToken(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
