//! Persistent tree rebuilding.
//!
//! An edit produces a new root by copying the containers on the path from the
//! root to the edited slot, each with exactly one child substituted. Every
//! other subtree is shared by handle with the input document, which is never
//! touched. Copying a container is shallow: its children are handles.

use patchwork_json_pointer::{Hop, Slot};
use patchwork_util::{JsonValue, Map};

use super::types::{OpResult, PatchError};

/// Rebuilds the ancestors listed in `ancestors` (root first) around `node`,
/// which replaces the child the last ancestor hop points at.
pub(crate) fn graft(ancestors: &[Hop<'_>], node: JsonValue) -> JsonValue {
    ancestors.iter().rev().fold(node, |child, hop| match *hop {
        Hop::Member { object, key } => with_member(object, key, child),
        Hop::Element { array, index } => with_element(array, index, child),
    })
}

/// Copy of `object` with `key` set. An existing key keeps its position, a new
/// one is appended.
fn with_member(object: &Map, key: &str, value: JsonValue) -> JsonValue {
    let mut object = object.clone();
    object.insert(key.to_owned(), value);
    JsonValue::object(object)
}

fn with_element(array: &[JsonValue], index: usize, value: JsonValue) -> JsonValue {
    let mut array = array.to_vec();
    array[index] = value;
    JsonValue::array(array)
}

fn unchanged(doc: &JsonValue, old: &JsonValue) -> OpResult {
    OpResult {
        doc: doc.clone(),
        old: Some(old.clone()),
    }
}

/// Inserts `value` at `slot`: upsert for object members, shifting insert for
/// array elements, whole-document replacement for the root.
pub(crate) fn insert(
    doc: &JsonValue,
    slot: &Slot<'_>,
    value: JsonValue,
) -> Result<OpResult, PatchError> {
    let Some((parent, ancestors)) = slot.split_parent() else {
        return Ok(OpResult {
            doc: value,
            old: Some(doc.clone()),
        });
    };
    match *parent {
        Hop::Member { object, key } => {
            if let Some(existing) = slot.target {
                if JsonValue::ptr_eq(existing, &value) {
                    return Ok(unchanged(doc, existing));
                }
            }
            let mut object = object.clone();
            let old = object.insert(key.to_owned(), value);
            Ok(OpResult {
                doc: graft(ancestors, JsonValue::object(object)),
                old,
            })
        }
        Hop::Element { array, index } => {
            if index > array.len() {
                return Err(PatchError::IndexOutOfBounds);
            }
            let mut array = array.to_vec();
            array.insert(index, value);
            Ok(OpResult {
                doc: graft(ancestors, JsonValue::array(array)),
                old: None,
            })
        }
    }
}

/// Removes the value at `slot`, returning the new document and the removed
/// value. Later array elements shift down; remaining members keep their order.
pub(crate) fn remove(slot: &Slot<'_>) -> Result<(JsonValue, JsonValue), PatchError> {
    let Some((parent, ancestors)) = slot.split_parent() else {
        return Err(PatchError::InvalidPatch(
            "cannot remove the document root".to_string(),
        ));
    };
    let removed = slot.existing()?.clone();
    let container = match *parent {
        Hop::Member { object, key } => {
            let mut object = object.clone();
            object.shift_remove(key);
            JsonValue::object(object)
        }
        Hop::Element { array, index } => {
            let mut array = array.to_vec();
            array.remove(index);
            JsonValue::array(array)
        }
    };
    Ok((graft(ancestors, container), removed))
}

/// Substitutes the value at an occupied `slot`, leaving its key or index
/// unchanged.
pub(crate) fn replace(
    doc: &JsonValue,
    slot: &Slot<'_>,
    value: JsonValue,
) -> Result<OpResult, PatchError> {
    let existing = slot.existing()?;
    if JsonValue::ptr_eq(existing, &value) {
        return Ok(unchanged(doc, existing));
    }
    let doc = match slot.split_parent() {
        None => value,
        Some((Hop::Member { object, key }, ancestors)) => {
            graft(ancestors, with_member(object, key, value))
        }
        Some((Hop::Element { array, index }, ancestors)) => {
            graft(ancestors, with_element(array, *index, value))
        }
    };
    Ok(OpResult {
        doc,
        old: Some(existing.clone()),
    })
}
