use glam::{Mat4, Vec3};

/// A position/rotation/scale triple for placing a quad in the world.
///
/// Transforms are flat: there is no parent/child hierarchy.  Composite
/// objects recompute the transforms of their parts from their own position
/// every frame instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub pos: Vec3,
    /// Per-axis rotation angles in radians.
    pub rot: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            rot: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_pos(pos: Vec3) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// The model matrix: scale, then rotation (x, then y, then z), then
    /// translation, i.e. `T · R · S` applied to local geometry.
    pub fn matrix(&self) -> Mat4 {
        let rot = Mat4::from_rotation_z(self.rot.z)
            * Mat4::from_rotation_y(self.rot.y)
            * Mat4::from_rotation_x(self.rot.x);
        Mat4::from_translation(self.pos) * rot * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn identity_transform_is_identity_matrix() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform {
            pos: Vec3::new(3.0, 0.0, 0.0),
            rot: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let p = t.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn z_rotation_turns_x_into_y() {
        let t = Transform {
            rot: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
            ..Transform::default()
        };
        let p = t.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_composes_x_then_y_then_z() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        let t = Transform {
            rot: Vec3::new(half_pi, 0.0, half_pi),
            ..Transform::default()
        };
        // Rx sends +y to +z; Rz leaves +z alone.
        let p = t.matrix() * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }
}
