//! Token-level helpers: escaping, parsing, formatting and path relations.

use crate::types::Path;
use crate::validate::{validate_json_pointer, validate_path, ValidationError};

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components, without validation.
///
/// - Empty string returns empty vec
/// - A leading `/` is stripped
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    match pointer.strip_prefix('/') {
        Some(rest) => rest.split('/').map(unescape_component).collect(),
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(unescape_component).collect(),
    }
}

/// Parse a JSON Pointer string, rejecting anything RFC 6901 does not allow.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the pointer is not empty and lacks the
/// leading `/`, contains a `~` not followed by `0` or `1`, or exceeds the
/// length limits.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::try_parse_json_pointer;
///
/// assert_eq!(try_parse_json_pointer("/a~1b").unwrap(), vec!["a/b"]);
/// assert!(try_parse_json_pointer("a").is_err());
/// assert!(try_parse_json_pointer("/a~2").is_err());
/// ```
pub fn try_parse_json_pointer(pointer: &str) -> Result<Path, ValidationError> {
    validate_json_pointer(pointer)?;
    let path = parse_json_pointer(pointer);
    validate_path(&path)?;
    Ok(path)
}

/// Format path components into a JSON Pointer string.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.iter().map(|c| c.len() + 1).sum());
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Returns `true` if `path` equals `prefix` or lies below it.
pub fn starts_with(path: &[String], prefix: &[String]) -> bool {
    path.len() >= prefix.len() && path[..prefix.len()] == *prefix
}

/// Check if a string is a canonical array index: `0` or a decimal number
/// without leading zeros.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    match bytes {
        [] => false,
        [b'0', _, ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}
