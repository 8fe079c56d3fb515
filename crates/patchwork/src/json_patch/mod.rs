//! JSON Patch (RFC 6902) over persistent documents.
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.
//!
//! Applying an operation never modifies its input. The result is a new root
//! that shares every subtree off the edited path with the input, so any
//! number of document versions can be kept around cheaply and read from
//! several threads at once.

pub mod apply;
pub mod codec;
mod rebuild;
pub mod types;

pub use apply::{apply, apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{
    ApplyPatchOptions, OpResult, Patch, PatchError, PatchOperation, PatchResult, PatchStep, Path,
};
