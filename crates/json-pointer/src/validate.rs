//! Strict checks applied to pointers arriving from outside the process.
//!
//! [`parse_json_pointer`](crate::parse_json_pointer) accepts anything; these
//! checks are what [`try_parse_json_pointer`](crate::try_parse_json_pointer)
//! adds on top of it.

use thiserror::Error;

/// Longest pointer string accepted, in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Deepest path accepted, in tokens.
pub const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Non-empty pointer without the leading `/`.
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    /// `~` followed by something other than `0` or `1`.
    #[error("INVALID_ESCAPE")]
    InvalidEscape,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
}

/// A raw (still escaped) reference token is well formed when every `~` starts
/// a `~0` or `~1` sequence.
fn has_valid_escapes(raw: &str) -> bool {
    let mut rest = raw;
    while let Some(pos) = rest.find('~') {
        match rest.as_bytes().get(pos + 1) {
            Some(b'0' | b'1') => rest = &rest[pos + 2..],
            _ => return false,
        }
    }
    true
}

/// Checks a pointer string against RFC 6901 syntax and the length limit.
///
/// The empty string (the whole document) is valid.
///
/// # Example
///
/// ```
/// use patchwork_json_pointer::{validate_json_pointer, ValidationError};
///
/// assert!(validate_json_pointer("").is_ok());
/// assert!(validate_json_pointer("/a~1b/-").is_ok());
/// assert_eq!(validate_json_pointer("a/b"), Err(ValidationError::PointerInvalid));
/// assert_eq!(validate_json_pointer("/a~"), Err(ValidationError::InvalidEscape));
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    let Some(body) = pointer.strip_prefix('/') else {
        return if pointer.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::PointerInvalid)
        };
    };
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::PointerTooLong);
    }
    if !body.split('/').all(has_valid_escapes) {
        return Err(ValidationError::InvalidEscape);
    }
    Ok(())
}

/// Checks the depth of an already tokenized path.
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    Ok(())
}
