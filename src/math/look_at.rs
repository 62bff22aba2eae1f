use glam::{Mat3, Quat, Vec3};

/// Squared lengths below this are treated as zero.
const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Nudge applied to the forward axis when it is parallel to `up`.
const PARALLEL_NUDGE: f32 = 1e-4;

/// Orientation of an object at `eye` whose local -Z axis faces `target`.
///
/// Mirrors the usual look-at matrix construction: the local Z axis points
/// from `target` to `eye`, X is `up × Z`, Y completes the basis. Coincident
/// points fall back to +Z, and a forward axis parallel to `up` is nudged off
/// the axis so the basis never degenerates.
#[must_use]
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let mut z = eye - target;
    if z.length_squared() < DEGENERATE_LENGTH_SQUARED {
        z = Vec3::Z;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() < DEGENERATE_LENGTH_SQUARED {
        if (up.z.abs() - 1.0).abs() < f32::EPSILON {
            z.x += PARALLEL_NUDGE;
        } else {
            z.z += PARALLEL_NUDGE;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize_or(Vec3::X);
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn faces_the_target() {
        let eye = Vec3::new(3.0, 1.0, -2.0);
        let target = Vec3::new(-1.0, 0.5, 4.0);
        let q = look_at_rotation(eye, target, Vec3::Y);
        assert!(approx(q * Vec3::NEG_Z, (target - eye).normalize()));
    }

    #[test]
    fn keeps_up_in_the_vertical_plane() {
        let q = look_at_rotation(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert!(approx(q * Vec3::Y, Vec3::Y));
        assert!(approx(q * Vec3::X, Vec3::X));
    }

    #[test]
    fn coincident_points_yield_identity() {
        let q = look_at_rotation(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(q.is_finite());
        assert!(approx(q * Vec3::NEG_Z, Vec3::NEG_Z));
    }

    #[test]
    fn looking_straight_down_stays_finite() {
        let q = look_at_rotation(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(q.is_finite());
        assert!(q.is_normalized());
        assert!((q * Vec3::NEG_Z).dot(Vec3::NEG_Y) > 0.999);
    }

    #[test]
    fn z_up_parallel_case_is_nudged() {
        let q = look_at_rotation(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Z);
        assert!(q.is_finite());
        assert!((q * Vec3::NEG_Z).dot(Vec3::NEG_Z) > 0.999);
    }
}
