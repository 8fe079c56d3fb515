use patchwork_util::{JsonNode, JsonValue};

use crate::util::is_valid_index;

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path doesn't exist or is invalid. `-` never
/// resolves to a value. The result borrows from `val` only, so `path` may be
/// a temporary.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::get;
/// use patchwork_util::JsonValue;
/// use serde_json::json;
///
/// let doc = JsonValue::from(json!({"foo": {"bar": 42}}));
/// let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
/// assert_eq!(val, Some(&JsonValue::from(42)));
///
/// let missing = get(&doc, &["missing".to_string()]);
/// assert_eq!(missing, None);
/// ```
pub fn get<'a>(val: &'a JsonValue, path: &[String]) -> Option<&'a JsonValue> {
    path.iter().try_fold(val, |current, token| match current.node() {
        JsonNode::Object(object) => object.get(token.as_str()),
        JsonNode::Array(array) if is_valid_index(token) => array.get(token.parse::<usize>().ok()?),
        _ => None,
    })
}
