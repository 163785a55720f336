//! 4x4 transform matrix
//!
//! Elements are addressed as `m[(x, y)]`. The layout and the multiplication
//! pairing below are the ones existing SE tooling produces and expects, so
//! they are kept exactly as is rather than following textbook row × column
//! order.
//!
//! Note the two different "translation" reads:
//! - [`Matrix4x4::transform_vector`] adds elements (3,0), (3,1), (3,2)
//! - [`Matrix4x4::translation`] reads elements (0,3), (1,3), (2,3)

use super::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Mul};

/// 4x4 matrix for affine transforms of bones and vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    m: [[f64; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4x4 {
    /// Create an identity matrix
    ///
    /// Walking the flattened grid, the diagonal is every 5th element.
    pub fn identity() -> Self {
        let mut m = [[0.0f64; 4]; 4];
        for i in 0..16 {
            m[i % 4][i / 4] = if i % 5 == 0 { 1.0 } else { 0.0 };
        }
        Self { m }
    }

    /// Create a rotation matrix from a quaternion
    ///
    /// Translation and the bottom row are cleared, except (3,3) which is 1.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let xx = q.x() * q.x();
        let xy = q.x() * q.y();
        let xz = q.x() * q.z();
        let xw = q.x() * q.w();

        let yy = q.y() * q.y();
        let yz = q.y() * q.z();
        let yw = q.y() * q.w();

        let zz = q.z() * q.z();
        let zw = q.z() * q.w();

        let mut result = Self::identity();

        result[(0, 0)] = 1.0 - 2.0 * (yy + zz);
        result[(1, 0)] = 2.0 * (xy - zw);
        result[(2, 0)] = 2.0 * (xz + yw);
        result[(3, 0)] = 0.0;

        result[(0, 1)] = 2.0 * (xy + zw);
        result[(1, 1)] = 1.0 - 2.0 * (xx + zz);
        result[(2, 1)] = 2.0 * (yz - xw);
        result[(3, 1)] = 0.0;

        result[(0, 2)] = 2.0 * (xz - yw);
        result[(1, 2)] = 2.0 * (yz + xw);
        result[(2, 2)] = 1.0 - 2.0 * (xx + yy);
        result[(3, 2)] = 0.0;

        result[(0, 3)] = 0.0;
        result[(1, 3)] = 0.0;
        result[(2, 3)] = 0.0;
        result[(3, 3)] = 1.0;

        result
    }

    /// The position component, see [`Vector3::from`]
    pub fn translation(&self) -> Vector3 {
        Vector3::from(self)
    }

    /// Transform a point: the first three columns rotate and scale, elements
    /// (3,0), (3,1) and (3,2) translate. No perspective divide.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            v.x() * m[0][0] + v.y() * m[1][0] + v.z() * m[2][0] + m[3][0],
            v.x() * m[0][1] + v.y() * m[1][1] + v.z() * m[2][1] + m[3][1],
            v.x() * m[0][2] + v.y() * m[1][2] + v.z() * m[2][2] + m[3][2],
        )
    }

    /// Re-express a rotation in the space of this matrix
    ///
    /// The vector part of the extracted quaternion is negated before it is
    /// returned. Extraction reads the rotation block transposed relative to
    /// [`Matrix4x4::from_quaternion`], and consumers depend on the flipped
    /// result, so it stays.
    pub fn transform_quaternion(&self, q: Quaternion) -> Quaternion {
        let rotation = Self::from_quaternion(q);
        let target = self * &rotation;
        Quaternion::from(&target).conjugate()
    }
}

impl From<[[f64; 4]; 4]> for Matrix4x4 {
    /// `grid[x][y]` becomes element (x, y)
    fn from(grid: [[f64; 4]; 4]) -> Self {
        Self { m: grid }
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    /// `grid[x][y]` becomes element (x, y)
    fn from(grid: [[f32; 4]; 4]) -> Self {
        Self {
            m: grid.map(|row| row.map(f64::from)),
        }
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        &self.m[x][y]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f64 {
        &mut self.m[x][y]
    }
}

fn multiply(left: &Matrix4x4, right: &Matrix4x4) -> Matrix4x4 {
    let mut result = [[0.0f64; 4]; 4];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).map(|k| right.m[i][k] * left.m[k][j]).sum();
        }
    }
    Matrix4x4 { m: result }
}

/// `left * right` sums `right(i,k) * left(k,j)` for element (i,j)
impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, right: Matrix4x4) -> Matrix4x4 {
        multiply(&self, &right)
    }
}

impl Mul for &Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, right: &Matrix4x4) -> Matrix4x4 {
        multiply(self, right)
    }
}
