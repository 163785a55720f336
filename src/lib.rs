//!
//! Selib is a library for the SE model and SE animation interchange formats.
//!
//! It provides the geometry types used for bones, joints and keyframes, the
//! conversions between quaternion and matrix rotations needed when rigged
//! models are imported or exported, and a few stream helpers for the string
//! encodings the formats use.
//!
//! The math types trust their caller: quaternions are never normalized and
//! degenerate input produces well defined but meaningless numbers instead of
//! errors.

pub mod binary_reader;
pub mod color;
pub mod keydata;
pub mod math;

pub use color::Color;
pub use keydata::KeyData;
