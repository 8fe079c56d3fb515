//! JSON Patch apply logic.
//!
//! Every operation takes the document by reference and returns a new root;
//! the input is never modified. A failed step leaves nothing behind: the
//! caller still holds the document it passed in.

use patchwork_json_pointer::{resolve, starts_with, Access};
use patchwork_util::{deep_equal, JsonValue};

use super::rebuild;
use super::types::{
    ApplyPatchOptions, OpResult, PatchError, PatchOperation, PatchResult, PatchStep,
};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &JsonValue, path: &[String], value: &JsonValue) -> Result<OpResult, PatchError> {
    let slot = resolve(doc, path, Access::Insert)?;
    rebuild::insert(doc, &slot, value.clone())
}

fn apply_remove(doc: &JsonValue, path: &[String]) -> Result<OpResult, PatchError> {
    let slot = resolve(doc, path, Access::Read)?;
    let (doc, removed) = rebuild::remove(&slot)?;
    Ok(OpResult {
        doc,
        old: Some(removed),
    })
}

fn apply_replace(
    doc: &JsonValue,
    path: &[String],
    value: &JsonValue,
) -> Result<OpResult, PatchError> {
    let slot = resolve(doc, path, Access::Read)?;
    rebuild::replace(doc, &slot, value.clone())
}

fn apply_move(doc: &JsonValue, path: &[String], from: &[String]) -> Result<OpResult, PatchError> {
    let source = resolve(doc, from, Access::Read)?;
    source.existing()?;
    if starts_with(path, from) {
        return Err(PatchError::InvalidPatch(
            "cannot move a value to itself or into its own subtree".to_string(),
        ));
    }
    let (intermediate, moved) = rebuild::remove(&source)?;
    let slot = resolve(&intermediate, path, Access::Insert)?;
    rebuild::insert(&intermediate, &slot, moved)
}

fn apply_copy(doc: &JsonValue, path: &[String], from: &[String]) -> Result<OpResult, PatchError> {
    let value = resolve(doc, from, Access::Read)?.existing()?.clone();
    apply_add(doc, path, &value)
}

fn apply_test(doc: &JsonValue, path: &[String], expected: &JsonValue) -> Result<OpResult, PatchError> {
    let actual = resolve(doc, path, Access::Read)?.existing()?;
    if !deep_equal(actual, expected) {
        return Err(PatchError::TestFailed);
    }
    Ok(OpResult {
        doc: doc.clone(),
        old: None,
    })
}

// ── Public API ────────────────────────────────────────────────────────────

/// Apply a single operation to `doc`, returning the new document.
///
/// Only the containers on the path to the edited location are rebuilt; all
/// other subtrees of the result are shared with `doc`. A `test` step returns
/// `doc` itself.
///
/// # Example
///
/// ```
/// use patchwork::json_patch::{apply_op, PatchStep};
/// use patchwork_json_pointer::parse_json_pointer;
/// use patchwork_util::JsonValue;
/// use serde_json::json;
///
/// let doc = JsonValue::from(json!({"foo": "bar"}));
/// let step = PatchStep::add(parse_json_pointer("/baz"), "qux");
/// let out = apply_op(&doc, &step).unwrap();
/// assert_eq!(out.doc, JsonValue::from(json!({"foo": "bar", "baz": "qux"})));
/// assert_eq!(doc, JsonValue::from(json!({"foo": "bar"})));
/// ```
pub fn apply_op(doc: &JsonValue, step: &PatchStep) -> Result<OpResult, PatchError> {
    let path = &step.path;
    match step.operation {
        PatchOperation::Add => apply_add(doc, path, step.required_value()?),
        PatchOperation::Remove => apply_remove(doc, path),
        PatchOperation::Replace => apply_replace(doc, path, step.required_value()?),
        PatchOperation::Move => apply_move(doc, path, step.required_from()?),
        PatchOperation::Copy => apply_copy(doc, path, step.required_from()?),
        PatchOperation::Test => apply_test(doc, path, step.required_value()?),
    }
}

/// Apply steps in order and return the final document.
///
/// Stops at the first failing step and returns its error; the intermediate
/// documents are discarded and `doc` is unaffected.
pub fn apply(doc: &JsonValue, steps: &[PatchStep]) -> Result<JsonValue, PatchError> {
    steps
        .iter()
        .try_fold(doc.clone(), |current, step| Ok(apply_op(&current, step)?.doc))
}

/// Apply a sequence of operations, recording the document after each one.
pub fn apply_ops(doc: &JsonValue, steps: &[PatchStep]) -> Result<PatchResult, PatchError> {
    let mut current = doc.clone();
    let mut res = Vec::with_capacity(steps.len());
    for step in steps {
        let result = apply_op(&current, step)?;
        current = result.doc.clone();
        res.push(result);
    }
    Ok(PatchResult { doc: current, res })
}

/// Apply a sequence of operations with options.
///
/// With `snapshots: false` only the final document is returned and `res` is
/// empty.
pub fn apply_patch(
    doc: &JsonValue,
    steps: &[PatchStep],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    if options.snapshots {
        apply_ops(doc, steps)
    } else {
        Ok(PatchResult {
            doc: apply(doc, steps)?,
            res: Vec::new(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
