//! 3D Transform (position, rotation, scale)

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A 3D transform with position, rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world (or parent-local) space
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * (p * self.scale) + self.position
    }

    /// Transform a direction from local space to world space
    ///
    /// Applies scale and rotation, but not translation.
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.rotation * (d * self.scale)
    }

    /// Compute the inverse transform
    ///
    /// `transform.inverse().transform_point(transform.transform_point(p)) == p`
    pub fn inverse(&self) -> Self {
        let inv_scale = if self.scale.abs() > 1e-10 {
            1.0 / self.scale
        } else {
            1.0
        };
        let inv_rotation = self.rotation.inverse();
        let inv_position = inv_rotation * (-self.position) * inv_scale;

        Self {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            position: self.transform_point(other.position),
            rotation: (self.rotation * other.rotation).normalize(),
            scale: self.scale * other.scale,
        }
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate about an axis fixed in world space, angle in degrees
    ///
    /// The axis does not have to be normalized.
    pub fn rotate_about_axis_deg(&mut self, axis: Vec3, degrees: f32) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            log::warn!("Ignoring rotation about zero-length axis");
            return;
        }
        let rotor = Quat::from_axis_angle(axis, degrees.to_radians());
        self.rotation = (rotor * self.rotation).normalize();
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let transformed = t.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(transformed, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_scale() {
        let mut t = Transform::identity();
        t.scale = 2.0;
        let transformed = t.transform_point(Vec3::ONE);
        assert!(vec_approx_eq(transformed, Vec3::splat(2.0)));
    }

    #[test]
    fn test_rotation() {
        let rotor = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let t = Transform::from_position_rotation(Vec3::ZERO, rotor);
        let transformed = t.transform_point(Vec3::X);
        assert!(
            vec_approx_eq(transformed, Vec3::Y),
            "Expected Y, got {:?}",
            transformed
        );
    }

    #[test]
    fn test_rotate_about_global_y() {
        // The demo's torus setup: 90 degrees about the global Y axis maps +Z to +X
        let mut t = Transform::identity();
        t.rotate_about_axis_deg(Vec3::Y, 90.0);
        let transformed = t.transform_direction(Vec3::Z);
        assert!(
            vec_approx_eq(transformed, Vec3::X),
            "Expected X, got {:?}",
            transformed
        );
    }

    #[test]
    fn test_rotate_about_zero_axis_ignored() {
        let mut t = Transform::identity();
        t.rotate_about_axis_deg(Vec3::ZERO, 90.0);
        assert!(vec_approx_eq(t.transform_direction(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_transform_order() {
        // Transform applies: scale, then rotate, then translate
        let mut t = Transform::identity();
        t.scale = 2.0;
        t.rotation = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        t.position = Vec3::new(10.0, 0.0, 0.0);

        // X * 2 = (2, 0, 0), rotated 90 deg about Z = (0, 2, 0), + (10, 0, 0) = (10, 2, 0)
        let transformed = t.transform_point(Vec3::X);
        assert!(
            vec_approx_eq(transformed, Vec3::new(10.0, 2.0, 0.0)),
            "Expected (10, 2, 0), got {:?}",
            transformed
        );
    }

    #[test]
    fn test_inverse() {
        let mut t = Transform::from_position_rotation(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(Vec3::Y, 0.5),
        );
        t.scale = 2.0;

        let p = Vec3::new(1.0, 2.0, 3.0);
        let back = t.inverse().transform_point(t.transform_point(p));
        assert!(vec_approx_eq(p, back), "Expected {:?}, got {:?}", p, back);
    }

    #[test]
    fn test_transform_direction() {
        let t = Transform::from_position(Vec3::splat(100.0));
        // Direction should not be affected by position
        assert!(vec_approx_eq(t.transform_direction(Vec3::X), Vec3::X));
    }

    #[test]
    fn test_compose() {
        let t1 = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        let t2 = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));

        // t1.compose(t2) applies t2 first, then t1
        let composed = t1.compose(&t2);
        let result = composed.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(result, Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert!(vec_approx_eq(t.position, Vec3::ZERO));
        assert_eq!(t.scale, 1.0);
    }
}
