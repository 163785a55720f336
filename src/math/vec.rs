//! Vector types for positions, scales and texture coordinates
//!
//! Both types are plain values: fields are set at construction and every
//! operation returns a new vector.

use super::{Matrix4x4, component_hash};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[cfg(test)]
use fake::Dummy;

/// A 2D vector, used for texture coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Dummy))]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// XOR of the component hashes
    pub fn hash_code(&self) -> u64 {
        component_hash(self.x) ^ component_hash(self.y)
    }
}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x as f64, y as f64)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A 3D vector, used for positions and scales
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Dummy))]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Promote a 2D vector by supplying the missing z component
    pub const fn from_vector2(v: Vector2, z: f64) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Drop the z component
    pub const fn truncate(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn z(&self) -> f64 {
        self.z
    }

    /// XOR of the component hashes
    pub fn hash_code(&self) -> u64 {
        self.truncate().hash_code() ^ component_hash(self.z)
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x as f64, y as f64, z as f64)
    }
}

/// Reads the position component of the matrix, elements (0,3), (1,3) and (2,3).
///
/// No decomposition is done, rotation and scale are ignored.
impl From<&Matrix4x4> for Vector3 {
    fn from(m: &Matrix4x4) -> Self {
        Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)])
    }
}

impl std::ops::Mul for Vector3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Vector3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Vector3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
