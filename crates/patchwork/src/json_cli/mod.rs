//! Core logic behind the command-line entry points.
//!
//! - `json-patch`: apply a JSON Patch to a document
//! - `json-pointer`: look up a JSON Pointer in a document

use patchwork_json_pointer::{resolve, try_parse_json_pointer, Access, JsonPointerError};
use patchwork_util::JsonValue;
use serde_json::Value;

use crate::json_patch::codec::json::from_json_patch;
use crate::json_patch::{apply_patch, ApplyPatchOptions, PatchError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Patch(PatchError),
    Pointer(JsonPointerError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Patch(e) => write!(f, "{e}"),
            CliError::Pointer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

impl From<JsonPointerError> for CliError {
    fn from(e: JsonPointerError) -> Self {
        CliError::Pointer(e)
    }
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string. Member order
/// of the input is preserved.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: JsonValue = serde_json::from_str(doc_json)?;
    let raw: Value = serde_json::from_str(patch_json)?;
    let steps = from_json_patch(&raw)?;
    let result = apply_patch(&doc, &steps, &ApplyPatchOptions { snapshots: false })?;
    Ok(serde_json::to_string_pretty(&result.doc)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// Returns the found value as a pretty-printed JSON string. A pointer that
/// does not resolve reports `NOT_FOUND` for a missing member or
/// `INDEX_OUT_OF_BOUNDS` for a missing array element.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: JsonValue = serde_json::from_str(doc_json)?;
    let path = try_parse_json_pointer(pointer).map_err(JsonPointerError::from)?;
    let value = resolve(&doc, &path, Access::Read)?.existing()?;
    Ok(serde_json::to_string_pretty(value)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
