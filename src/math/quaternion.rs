//! Quaternion rotations
//!
//! Quaternions are never normalized by this module. Callers are expected to
//! hand in unit quaternions for anything rotation related, a non-unit
//! quaternion carries its scale into every conversion.

use super::{Matrix4x4, Vector3, component_hash};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

#[cfg(test)]
use fake::Dummy;

/// A rotation stored as (x, y, z, w)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Dummy))]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Promote a vector part by supplying w
    pub const fn from_vector3(v: Vector3, w: f64) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The (x, y, z) part
    pub const fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotation of `radians` around `axis`. The axis is used as given.
    pub fn from_axis_angle(axis: Vector3, radians: f64) -> Self {
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::from_vector3(axis * sin, cos)
    }

    /// Convert to (roll, pitch, yaw) in radians.
    ///
    /// At the gimbal lock boundary, where the pitch sine reaches ±1, the pitch
    /// is clamped to ±π/2 instead of going through `asin`.
    pub fn to_euler_angles(&self) -> Vector3 {
        let Self { x, y, z, w } = *self;

        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = 2.0 * (w * y - z * x);
        let pitch = if sinp.abs() >= 1.0 {
            FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        Vector3::new(roll, pitch, yaw)
    }

    /// Build a rotation from (roll, pitch, yaw) in radians.
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();

        Quaternion {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    /// Negated vector part, the inverse rotation for unit quaternions
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hash of the vector part XOR hash of w
    pub fn hash_code(&self) -> u64 {
        self.vector().hash_code() ^ component_hash(self.w)
    }
}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Quaternion::new(x as f64, y as f64, z as f64, w as f64)
    }
}

/// Extract the rotation from the upper-left 3x3 block of the matrix.
///
/// Branches on the trace so the scale factor never gets close to zero: when
/// the trace is not positive the largest diagonal element picks the formula.
impl From<&Matrix4x4> for Quaternion {
    fn from(m: &Matrix4x4) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
        if trace > 0.0 {
            let s = (1.0 + trace).sqrt() * 2.0;
            Quaternion {
                x: (m[(2, 1)] - m[(1, 2)]) / s,
                y: (m[(0, 2)] - m[(2, 0)]) / s,
                z: (m[(1, 0)] - m[(0, 1)]) / s,
                w: 0.25 * s,
            }
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion {
                x: 0.25 * s,
                y: (m[(0, 1)] + m[(1, 0)]) / s,
                z: (m[(0, 2)] + m[(2, 0)]) / s,
                w: (m[(2, 1)] - m[(1, 2)]) / s,
            }
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt() * 2.0;
            Quaternion {
                x: (m[(0, 1)] + m[(1, 0)]) / s,
                y: 0.25 * s,
                z: (m[(1, 2)] + m[(2, 1)]) / s,
                w: (m[(0, 2)] - m[(2, 0)]) / s,
            }
        } else {
            let s = (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt() * 2.0;
            Quaternion {
                x: (m[(0, 2)] + m[(2, 0)]) / s,
                y: (m[(1, 2)] + m[(2, 1)]) / s,
                z: 0.25 * s,
                w: (m[(1, 0)] - m[(0, 1)]) / s,
            }
        }
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, r: Quaternion) -> Quaternion {
        let l = self;
        Quaternion {
            x: l.w * r.x + l.x * r.w + l.y * r.z - l.z * r.y,
            y: l.w * r.y - l.x * r.z + l.y * r.w + l.z * r.x,
            z: l.w * r.z + l.x * r.y - l.y * r.x + l.z * r.w,
            w: l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
        }
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}
