use glam::{Mat4, Quat, Vec3};

/// The position/orientation/target triple driven by the controls.
///
/// Both managers mutate the same instance; [`SpatialControls`] owns it and
/// lends it out for every operation.
///
/// [`SpatialControls`]: super::SpatialControls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position of the camera or object.
    pub position: Vec3,
    /// Unit orientation; local -Z is the view direction.
    pub quaternion: Quat,
    /// Look-at point. The orbit pivot in third person; in first person it
    /// is re-derived from the view direction.
    pub target: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::Z,
            quaternion: Quat::IDENTITY,
            target: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Transform at `position` looking at `target`. The orientation is
    /// filled in once the controls take ownership.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, quaternion: Quat::IDENTITY, target }
    }

    /// Direction of the local -Z axis.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.quaternion * Vec3::NEG_Z
    }

    /// World matrix (rotation then translation).
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.quaternion, self.position)
    }

    /// View matrix for a camera carrying this transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_at_the_origin() {
        let transform = Transform::default();
        let to_target = (transform.target - transform.position).normalize();
        assert!((transform.forward() - to_target).length() < 1e-6);
    }

    #[test]
    fn view_matrix_maps_position_to_origin() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            quaternion: Quat::from_rotation_y(0.7),
            target: Vec3::ZERO,
        };
        let eye = transform.view_matrix().transform_point3(transform.position);
        assert!(eye.length() < 1e-5);
    }
}
