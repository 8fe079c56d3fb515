//! Slot resolution for patch operations.

use patchwork_util::{JsonNode, JsonValue};

use crate::types::{Access, Hop, Slot};
use crate::util::is_valid_index;
use crate::JsonPointerError;

/// An array reference token.
enum ArrayToken {
    Index(usize),
    Append,
}

fn parse_array_token(token: &str) -> Result<ArrayToken, JsonPointerError> {
    if token == "-" {
        return Ok(ArrayToken::Append);
    }
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        // Negative or non-numeric.
        return Err(JsonPointerError::IndexOutOfBounds);
    }
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidToken(token.to_string()));
    }
    token
        .parse()
        .map(ArrayToken::Index)
        .map_err(|_| JsonPointerError::IndexOutOfBounds)
}

/// Walks `path` through `root` and locates the slot the last token names.
///
/// Every token but the last must address an existing member or in-range
/// element; otherwise the result is `NotFound`. The last token only has to be
/// well formed for its container: whether the slot must already be occupied
/// is left to the caller, which can inspect [`Slot::target`].
///
/// # Errors
///
/// - `NotFound` - an intermediate token is missing, or the target's parent is
///   not a container
/// - `IndexOutOfBounds` - the final array token is negative, non-numeric or
///   too large
/// - `InvalidToken` - the final array token has a leading zero, or is `-`
///   under [`Access::Read`]
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::{parse_json_pointer, resolve, Access};
/// use patchwork_util::JsonValue;
/// use serde_json::json;
///
/// let doc = JsonValue::from(json!({"foo": ["bar", "baz"]}));
///
/// let path = parse_json_pointer("/foo/1");
/// let slot = resolve(&doc, &path, Access::Read).unwrap();
/// assert_eq!(slot.target, Some(&JsonValue::from("baz")));
///
/// let path = parse_json_pointer("/foo/-");
/// let slot = resolve(&doc, &path, Access::Insert).unwrap();
/// assert!(!slot.existed());
/// ```
pub fn resolve<'a>(
    root: &'a JsonValue,
    path: &'a [String],
    access: Access,
) -> Result<Slot<'a>, JsonPointerError> {
    let Some((last, init)) = path.split_last() else {
        return Ok(Slot {
            hops: Vec::new(),
            target: Some(root),
        });
    };

    let mut hops = Vec::with_capacity(path.len());
    let mut current = root;

    for token in init {
        let (hop, child) = match current.node() {
            JsonNode::Object(object) => {
                let child = object.get(token.as_str()).ok_or(JsonPointerError::NotFound)?;
                (Hop::Member { object, key: token }, child)
            }
            JsonNode::Array(array) => {
                let index = match parse_array_token(token) {
                    Ok(ArrayToken::Index(index)) => index,
                    _ => return Err(JsonPointerError::NotFound),
                };
                let child = array.get(index).ok_or(JsonPointerError::NotFound)?;
                (Hop::Element { array, index }, child)
            }
            _ => return Err(JsonPointerError::NotFound),
        };
        hops.push(hop);
        current = child;
    }

    let (hop, target) = match current.node() {
        JsonNode::Object(object) => (Hop::Member { object, key: last }, object.get(last.as_str())),
        JsonNode::Array(array) => {
            let index = match parse_array_token(last)? {
                ArrayToken::Index(index) => index,
                ArrayToken::Append if access == Access::Insert => array.len(),
                ArrayToken::Append => return Err(JsonPointerError::InvalidToken(last.clone())),
            };
            (Hop::Element { array, index }, array.get(index))
        }
        _ => return Err(JsonPointerError::NotFound),
    };
    hops.push(hop);

    Ok(Slot { hops, target })
}
