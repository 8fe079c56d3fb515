//! Type definitions for JSON Pointer.

use patchwork_util::{JsonValue, Map};

use crate::JsonPointerError;

/// A single reference token, already unescaped.
pub type PathStep = String;

/// A tokenized JSON Pointer. The empty path addresses the whole document.
pub type Path = Vec<PathStep>;

/// How the final token of a path is going to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The slot is read, replaced or removed. `-` is not a valid final token.
    Read,
    /// A value is inserted into the slot. `-` addresses one past the last
    /// array element.
    Insert,
}

/// One step down the tree: a container together with the position taken
/// out of it.
#[derive(Debug, Clone, Copy)]
pub enum Hop<'a> {
    Member { object: &'a Map, key: &'a str },
    /// `index` may equal or exceed `array.len()` on the final hop.
    Element { array: &'a [JsonValue], index: usize },
}

/// A resolved location inside a document.
///
/// `hops` runs from the root down to the target's parent, so the last hop
/// is the container that holds (or would hold) the target. A root slot has
/// no hops.
#[derive(Debug, Clone)]
pub struct Slot<'a> {
    pub hops: Vec<Hop<'a>>,
    /// The value currently in the slot, if any.
    pub target: Option<&'a JsonValue>,
}

impl<'a> Slot<'a> {
    pub fn is_root(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn existed(&self) -> bool {
        self.target.is_some()
    }

    /// The container holding the target, and the hops above it.
    pub fn split_parent(&self) -> Option<(&Hop<'a>, &[Hop<'a>])> {
        self.hops.split_last()
    }

    /// Returns the value in the slot, or the error describing why the slot is
    /// empty: a missing member is `NotFound`, an index past the end of an
    /// array is `IndexOutOfBounds`.
    pub fn existing(&self) -> Result<&'a JsonValue, JsonPointerError> {
        match (self.target, self.hops.last()) {
            (Some(value), _) => Ok(value),
            (None, Some(Hop::Element { .. })) => Err(JsonPointerError::IndexOutOfBounds),
            (None, _) => Err(JsonPointerError::NotFound),
        }
    }
}
