//! JSON equality utilities.
//!
//! Structural comparison of [`JsonValue`](crate::JsonValue) trees, used by the
//! patch `test` operation.

mod deep_equal;

pub use deep_equal::{deep_equal, number_equal};
