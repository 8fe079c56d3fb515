//! Wire formats for patch steps.

pub mod json;
