//! 4x4 homogeneous transformation matrices
//!
//! Storage is row-major, `m[row][col]`, and vectors are treated as columns:
//! in `a * b * v` the matrix `b` is applied first. Constructors follow the
//! right-handed OpenGL conventions (camera looks down `-Z`, clip depth in
//! `[-1, 1]`).
//!
//! The plain constructors never validate their inputs. Degenerate arguments
//! propagate IEEE infinities and NaNs into the result. The `checked_*`
//! variants report those cases as [`Degenerate`] instead.

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use log::{debug, trace};

use crate::error::{Degenerate, Result};
use crate::vector::Vector3;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    /// Matrix with `diag` on the diagonal and zero elsewhere
    pub fn new(diag: f32) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = diag;
        }
        Self { m }
    }

    pub fn identity() -> Self {
        Self::new(1.0)
    }

    pub fn zero() -> Self {
        Self::new(0.0)
    }

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Apply to the point `(x, y, z, 1)` and divide by the resulting `w`.
    ///
    /// When `w` comes out exactly zero the divide is skipped and the raw
    /// `(x, y, z)` is returned.
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        let (p, w) = self.transform_homogeneous(v);
        if w != 0.0 {
            p / w
        } else {
            trace!("w == 0 for {}, skipping perspective divide", v);
            p
        }
    }

    /// Like [`transform_point`](Self::transform_point) but fails instead of
    /// skipping the divide when `w` is zero.
    pub fn checked_transform_point(&self, v: Vector3) -> Result<Vector3> {
        let (p, w) = self.transform_homogeneous(v);
        if w == 0.0 {
            debug!("rejecting transform of {}: w == 0", v);
            return Err(Degenerate::ZeroHomogeneousW.into());
        }
        Ok(p / w)
    }

    fn transform_homogeneous(&self, v: Vector3) -> (Vector3, f32) {
        let m = &self.m;
        let x = m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3];
        let y = m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3];
        let z = m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3];
        let w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        (Vector3::new(x, y, z), w)
    }

    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        let mut result = Self::identity();
        result.m[0][3] = tx;
        result.m[1][3] = ty;
        result.m[2][3] = tz;
        result
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        let mut result = Self::identity();
        result.m[0][0] = sx;
        result.m[1][1] = sy;
        result.m[2][2] = sz;
        result
    }

    /// Rotation about +X, angle in radians
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.m[1][1] = cos;
        result.m[1][2] = -sin;
        result.m[2][1] = sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about +Y, angle in radians
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.m[0][0] = cos;
        result.m[0][2] = sin;
        result.m[2][0] = -sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about +Z, angle in radians
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.m[0][0] = cos;
        result.m[0][1] = -sin;
        result.m[1][0] = sin;
        result.m[1][1] = cos;
        result
    }

    /// Symmetric frustum projection. `fovy` is the full vertical field of
    /// view in radians.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fovy = (fovy / 2.0).tan();
        let mut result = Self::zero();
        result.m[0][0] = 1.0 / (aspect * tan_half_fovy);
        result.m[1][1] = 1.0 / tan_half_fovy;
        result.m[2][2] = -(far + near) / (far - near);
        result.m[2][3] = -2.0 * far * near / (far - near);
        result.m[3][2] = -1.0;
        result
    }

    pub fn checked_perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        let degenerate = if aspect == 0.0 {
            Some(Degenerate::ZeroAspect)
        } else if (fovy / 2.0).tan() == 0.0 {
            Some(Degenerate::ZeroFieldOfView)
        } else if near == far {
            Some(Degenerate::EqualClipPlanes)
        } else {
            None
        };

        match degenerate {
            Some(reason) => {
                debug!(
                    "rejecting perspective(fovy={}, aspect={}, near={}, far={}): {}",
                    fovy, aspect, near, far, reason
                );
                Err(reason.into())
            }
            None => Ok(Self::perspective(fovy, aspect, near, far)),
        }
    }

    /// Right-handed view matrix looking from `eye` towards `target`
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(&up.normalize()).normalize();
        let u = s.cross(&f);

        Self::from_rows([
            [s.x, s.y, s.z, -s.dot(&eye)],
            [u.x, u.y, u.z, -u.dot(&eye)],
            [-f.x, -f.y, -f.z, f.dot(&eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn checked_look_at(eye: Vector3, target: Vector3, up: Vector3) -> Result<Self> {
        let reason = if eye == target {
            Some(Degenerate::EyeAtTarget)
        } else {
            let f = (target - eye).normalize();
            let side = f.cross(&up.normalize()).length();
            // NaN covers a zero-length up vector
            if side.is_nan() || side <= f32::EPSILON {
                Some(Degenerate::UpParallelToForward)
            } else {
                None
            }
        };

        match reason {
            Some(reason) => {
                debug!(
                    "rejecting look_at(eye={}, target={}, up={}): {}",
                    eye, target, up, reason
                );
                Err(reason.into())
            }
            None => Ok(Self::look_at(eye, target, up)),
        }
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<&Matrix4x4> for &Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, other: &Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::zero();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        result
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, other: Matrix4x4) -> Matrix4x4 {
        &self * &other
    }
}

impl Mul<Vector3> for &Matrix4x4 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.transform_point(v)
    }
}

impl Mul<Vector3> for Matrix4x4 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.transform_point(v)
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl From<Matrix4x4> for nalgebra::Matrix4<f32> {
    fn from(mat: Matrix4x4) -> Self {
        nalgebra::Matrix4::from_fn(|i, j| mat.m[i][j])
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4x4 {
    fn from(mat: nalgebra::Matrix4<f32>) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = mat[(i, j)];
            }
        }
        Self { m }
    }
}
