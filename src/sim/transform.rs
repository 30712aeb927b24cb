//! Position, rotation and scale kept as separate parts
//!
//! The world matrix is always rebuilt as `T * R * S`, so either the position
//! or the orientation can be changed without disturbing the other.

use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Mat3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Mat3::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Mat3::IDENTITY,
            scale,
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub fn set_rotation(&mut self, rotation: Mat3) {
        self.rotation = rotation;
    }

    /// Compose a further rotation of `angle_deg` about `axis` (local frame)
    pub fn rotate(&mut self, angle_deg: f32, axis: Vec3) {
        let step = Mat3::from_axis_angle(axis.normalize(), angle_deg.to_radians());
        self.rotation *= step;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    #[inline]
    pub fn position_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    #[inline]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_mat3(self.rotation)
    }

    #[inline]
    pub fn scale_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale)
    }

    /// translate(position) * rotation * scale(scale)
    pub fn world_matrix(&self) -> Mat4 {
        self.position_matrix() * self.rotation_matrix() * self.scale_matrix()
    }
}

/// Rotation of `angle_deg` about the vertical axis
#[inline]
pub fn yaw(angle_deg: f32) -> Mat3 {
    Mat3::from_rotation_y(angle_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_world_matrix_order() {
        let mut t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 1.0, 1.0));
        t.set_rotation(yaw(90.0));

        // Scale first (x doubled), then rotate +90° about Y (x -> -z), then translate
        let p = t.world_matrix().transform_point3(Vec3::X);
        assert!(approx(p, Vec3::new(1.0, 2.0, 1.0)), "got {p:?}");
    }

    #[test]
    fn test_translate_keeps_rotation() {
        let mut t = Transform::default();
        t.rotate(-90.0, Vec3::Y);
        let before = t.rotation;
        t.translate(Vec3::new(0.5, 0.0, -1.0));
        t.translate(Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(t.rotation, before);
        assert!(approx(t.position, Vec3::new(1.0, 0.0, -1.0)));
        assert!(approx(
            t.position_matrix().transform_point3(Vec3::ZERO),
            t.position
        ));
    }

    #[test]
    fn test_rotate_composes() {
        let mut t = Transform::default();
        t.rotate(-90.0, Vec3::Y);
        t.rotate(-90.0, Vec3::X);

        let expected = yaw(-90.0) * Mat3::from_rotation_x((-90.0f32).to_radians());
        assert!(t.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_uniform_scale() {
        let mut t = Transform::default();
        t.set_uniform_scale(0.9);
        assert_eq!(t.scale, Vec3::splat(0.9));
        assert!(approx(
            t.scale_matrix().transform_vector3(Vec3::ONE),
            Vec3::splat(0.9)
        ));
    }
}
