//! Rotation state and helpers for composing model/view/projection matrices

use crate::matrix::Matrix4x4;
use crate::vector::Vector3;

/// Rotation state around three axes (in radians)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

pub struct Transform;

impl Transform {
    /// X rotation first, then Y, then Z
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4x4 {
        let rx = Matrix4x4::rotation_x(rotation.x);
        let ry = Matrix4x4::rotation_y(rotation.y);
        let rz = Matrix4x4::rotation_z(rotation.z);
        rz * ry * rx
    }

    /// Scale, then rotate, then translate
    pub fn model_matrix(translation: Vector3, rotation: &RotationState, scale: Vector3) -> Matrix4x4 {
        let t = Matrix4x4::translation(translation.x, translation.y, translation.z);
        let s = Matrix4x4::scaling(scale.x, scale.y, scale.z);
        t * Self::rotation_matrix(rotation) * s
    }

    pub fn mvp(model: &Matrix4x4, view: &Matrix4x4, projection: &Matrix4x4) -> Matrix4x4 {
        &(projection * view) * model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::new(0.0, 0.0, 0.0));

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&RotationState::zero());
        assert_eq!(matrix, Matrix4x4::identity());
    }

    #[test]
    fn test_rotation_order() {
        // X first takes +Y to +Z, then Z leaves it alone
        let rotation = RotationState::new(FRAC_PI_2, 0.0, FRAC_PI_2);
        let v = Transform::rotation_matrix(&rotation) * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_model_matrix() {
        let model = Transform::model_matrix(
            Vector3::new(10.0, 0.0, 0.0),
            &RotationState::new(0.0, 0.0, FRAC_PI_2),
            Vector3::new(2.0, 2.0, 2.0),
        );
        let v = model * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(10.0, 2.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_mvp_applies_model_first() {
        let model = Matrix4x4::translation(0.0, 0.0, -2.0);
        let view = Matrix4x4::scaling(3.0, 3.0, 3.0);
        let projection = Matrix4x4::translation(1.0, 0.0, 0.0);
        let v = Transform::mvp(&model, &view, &projection) * Vector3::zero();
        assert_eq!(v, Vector3::new(1.0, 0.0, -6.0));
    }
}
