//! Geometry math for the SE formats
//!
//! This module provides the value types used for bone and keyframe data:
//! - Vectors (vec submodule)
//! - Quaternion rotations (quaternion submodule)
//! - 4x4 transform matrices (matrix submodule)

mod matrix;
mod quaternion;
mod vec;

pub use matrix::*;
pub use quaternion::*;
pub use vec::*;

/// Hash of a single component, consistent with `f64` equality.
///
/// `0.0` and `-0.0` compare equal so they must hash the same.
#[inline]
pub(crate) fn component_hash(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}
