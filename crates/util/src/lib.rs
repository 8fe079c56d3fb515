//! patchwork-util - immutable JSON values for the patchwork crates.
//!
//! This crate provides the persistent [`JsonValue`] tree the patch engine
//! operates on, and the structural [`deep_equal`] comparison.

pub mod json_equal;
pub mod json_value;

pub use json_equal::{deep_equal, number_equal};
pub use json_value::{JsonNode, JsonValue, Map};
