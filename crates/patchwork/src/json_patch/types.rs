//! Core types for the JSON Patch module.

use std::fmt;
use std::str::FromStr;

use patchwork_json_pointer::{JsonPointerError, ValidationError};
use patchwork_util::JsonValue;
use thiserror::Error;

pub use patchwork_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A required object member or array element is absent.
    #[error("TARGET_NOT_FOUND")]
    TargetNotFound,
    /// An array token is negative, non-numeric, or past the operation's
    /// upper bound.
    #[error("INDEX_OUT_OF_BOUNDS")]
    IndexOutOfBounds,
    #[error("INVALID_POINTER_TOKEN: {0}")]
    InvalidPointerToken(String),
    #[error("INVALID_PATCH: {0}")]
    InvalidPatch(String),
    #[error("TEST_FAILED")]
    TestFailed,
}

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::NotFound => PatchError::TargetNotFound,
            JsonPointerError::IndexOutOfBounds => PatchError::IndexOutOfBounds,
            JsonPointerError::InvalidToken(token) => PatchError::InvalidPointerToken(token),
            JsonPointerError::Validation(err) => err.into(),
        }
    }
}

impl From<ValidationError> for PatchError {
    fn from(err: ValidationError) -> Self {
        PatchError::InvalidPointerToken(err.to_string())
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// The six RFC 6902 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchOperation {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl PatchOperation {
    /// Returns the operation name as it appears in the `op` member.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOperation::Add => "add",
            PatchOperation::Remove => "remove",
            PatchOperation::Replace => "replace",
            PatchOperation::Move => "move",
            PatchOperation::Copy => "copy",
            PatchOperation::Test => "test",
        }
    }

    /// Operations that read `from` instead of `value`.
    pub fn takes_from(&self) -> bool {
        matches!(self, PatchOperation::Move | PatchOperation::Copy)
    }

    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            PatchOperation::Add | PatchOperation::Replace | PatchOperation::Test
        )
    }
}

impl FromStr for PatchOperation {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(PatchOperation::Add),
            "remove" => Ok(PatchOperation::Remove),
            "replace" => Ok(PatchOperation::Replace),
            "move" => Ok(PatchOperation::Move),
            "copy" => Ok(PatchOperation::Copy),
            "test" => Ok(PatchOperation::Test),
            other => Err(PatchError::InvalidPatch(format!("unknown op: {other}"))),
        }
    }
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Step ──────────────────────────────────────────────────────────────────

/// One patch operation with its operands.
///
/// `from` is meaningful for `move` and `copy`, `value` for `add`, `replace`
/// and `test`. A step missing the operand its operation needs fails with
/// [`PatchError::InvalidPatch`] when applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchStep {
    pub operation: PatchOperation,
    pub path: Path,
    pub from: Option<Path>,
    pub value: Option<JsonValue>,
}

impl PatchStep {
    pub fn add(path: Path, value: impl Into<JsonValue>) -> Self {
        Self::with_value(PatchOperation::Add, path, value.into())
    }

    pub fn remove(path: Path) -> Self {
        PatchStep {
            operation: PatchOperation::Remove,
            path,
            from: None,
            value: None,
        }
    }

    pub fn replace(path: Path, value: impl Into<JsonValue>) -> Self {
        Self::with_value(PatchOperation::Replace, path, value.into())
    }

    /// `move` is a keyword, hence the suffix.
    pub fn move_to(path: Path, from: Path) -> Self {
        Self::with_from(PatchOperation::Move, path, from)
    }

    pub fn copy_to(path: Path, from: Path) -> Self {
        Self::with_from(PatchOperation::Copy, path, from)
    }

    pub fn test(path: Path, value: impl Into<JsonValue>) -> Self {
        Self::with_value(PatchOperation::Test, path, value.into())
    }

    fn with_value(operation: PatchOperation, path: Path, value: JsonValue) -> Self {
        PatchStep {
            operation,
            path,
            from: None,
            value: Some(value),
        }
    }

    fn with_from(operation: PatchOperation, path: Path, from: Path) -> Self {
        PatchStep {
            operation,
            path,
            from: Some(from),
            value: None,
        }
    }

    pub(crate) fn required_value(&self) -> Result<&JsonValue, PatchError> {
        self.value.as_ref().ok_or_else(|| {
            PatchError::InvalidPatch(format!("{} requires a value", self.operation))
        })
    }

    pub(crate) fn required_from(&self) -> Result<&Path, PatchError> {
        self.from.as_ref().ok_or_else(|| {
            PatchError::InvalidPatch(format!("{} requires a from pointer", self.operation))
        })
    }
}

/// An ordered list of steps.
pub type Patch = Vec<PatchStep>;

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: JsonValue,
    /// The value the operation displaced: the removed or replaced value, the
    /// prior value of an overwritten member, or the old root.
    pub old: Option<JsonValue>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: JsonValue,
    /// One entry per step, unless snapshots were disabled.
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone)]
pub struct ApplyPatchOptions {
    /// Record an [`OpResult`] for every step. Snapshots are cheap: each one
    /// shares all unchanged structure with its neighbours.
    pub snapshots: bool,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self { snapshots: true }
    }
}
