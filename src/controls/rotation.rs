//! Spherical-coordinate rotation and zoom.

use std::f32::consts::TAU;

use glam::Vec3;

use super::{ControlMode, Transform};
use crate::math::{look_at_rotation, Spherical, EPSILON};
use crate::settings::Settings;

/// Owns the spherical state and keeps the shared transform's orientation
/// (and, in orbit mode, its position) in sync with it.
#[derive(Debug, Clone, Default)]
pub struct RotationManager {
    spherical: Spherical,
}

impl RotationManager {
    /// Create a manager with a unit-radius spherical state. Call
    /// [`look_at`](Self::look_at) before use to derive the real state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current spherical state.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Set `target` to `point` and rebuild the spherical state and the
    /// orientation from the current position.
    pub fn look_at(
        &mut self,
        transform: &mut Transform,
        settings: &Settings,
        point: Vec3,
    ) {
        transform.target = point;
        let source =
            settings.mode().spherical_source(transform.position, point);
        self.spherical = Spherical::from_vec3(source);
        self.spherical.radius = self.spherical.radius.max(EPSILON);
        self.spherical.make_safe();
        self.update_quaternion(transform, settings);
    }

    /// Derive the orientation from the spherical state.
    pub fn update_quaternion(
        &self,
        transform: &mut Transform,
        settings: &Settings,
    ) {
        let up = settings.rotation.up;
        transform.quaternion = match settings.mode() {
            ControlMode::ThirdPerson { pivot_offset } => look_at_rotation(
                transform.position - transform.target,
                pivot_offset,
                up,
            ),
            ControlMode::FirstPerson => {
                look_at_rotation(Vec3::ZERO, self.spherical.to_vec3(), up)
            }
        };
    }

    /// Apply angular deltas (radians) with inversion, clamping, wrapping,
    /// and pole avoidance. In orbit mode the position follows.
    ///
    /// Does not touch the orientation; follow up with
    /// [`update_quaternion`](Self::update_quaternion) once per batch.
    pub fn adjust_spherical(
        &mut self,
        transform: &mut Transform,
        settings: &Settings,
        delta_theta: f32,
        delta_phi: f32,
    ) {
        let mode = settings.mode();
        let rotation = &settings.rotation;
        let s = &mut self.spherical;

        s.theta += ControlMode::theta_sign(rotation.invert_x) * delta_theta;
        s.phi += mode.phi_sign(rotation.invert_y) * delta_phi;

        s.theta = s
            .theta
            .max(rotation.min_azimuthal_angle)
            .min(rotation.max_azimuthal_angle);
        s.phi =
            s.phi.max(rotation.min_polar_angle).min(rotation.max_polar_angle);

        // Remainder keeps the sign, so theta stays in (-2π, 2π).
        s.theta %= TAU;
        s.make_safe();

        if mode.is_orbit() {
            transform.position = s.to_vec3() + transform.target;
        }
    }

    /// Move towards (negative `sign`) or away from (positive `sign`) the
    /// orbit target. No-op in first person or when zoom is disabled.
    pub fn zoom(
        &mut self,
        transform: &mut Transform,
        settings: &Settings,
        sign: f32,
    ) {
        let zoom = &settings.zoom;
        if !settings.general.orbit || !zoom.enabled {
            return;
        }

        let amount = sign * settings.sensitivity.zoom;
        let amount = if zoom.invert { -amount } else { amount };
        let (min, max) = zoom.distance_range();
        let wanted = self.spherical.radius + amount;
        self.spherical.radius = wanted.max(min).min(max);
        if self.spherical.radius != wanted {
            log::trace!(
                "zoom clamped radius {wanted} to {}",
                self.spherical.radius
            );
        }

        transform.position = self.spherical.to_vec3() + transform.target;
    }

    /// Unit view direction derived from the spherical state.
    #[must_use]
    pub fn view_direction(&self, settings: &Settings) -> Vec3 {
        self.spherical.direction() * settings.mode().view_sign()
    }

    /// Per-frame hook. All adjustments above apply immediately, so there is
    /// nothing to integrate.
    pub fn update(&mut self, _delta_time: f32) {}
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn setup(
        position: Vec3,
        target: Vec3,
        orbit: bool,
    ) -> (RotationManager, Transform, Settings) {
        let mut settings = Settings::default();
        settings.general.orbit = orbit;
        let mut transform = Transform::new(position, target);
        let mut manager = RotationManager::new();
        manager.look_at(&mut transform, &settings, target);
        (manager, transform, settings)
    }

    #[test]
    fn look_at_from_positive_z_in_orbit() {
        let (manager, transform, _) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        let s = manager.spherical();
        assert!((s.radius - 5.0).abs() < 1e-5);
        assert!((s.phi - FRAC_PI_2).abs() < 1e-5);
        assert!(s.theta.abs() < 1e-5);
        assert!(approx(transform.forward(), Vec3::NEG_Z));
    }

    #[test]
    fn quarter_turn_moves_orbit_position_to_negative_x() {
        // With invert_x = false a positive azimuth delta decreases theta,
        // which swings the camera from +Z round to -X.
        let (mut manager, mut transform, settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        manager.adjust_spherical(&mut transform, &settings, FRAC_PI_2, 0.0);
        manager.update_quaternion(&mut transform, &settings);

        assert!(approx(transform.position, Vec3::new(-5.0, 0.0, 0.0)));
        assert!(approx(transform.forward(), Vec3::X));
    }

    #[test]
    fn inverted_x_turns_the_other_way() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.rotation.invert_x = true;
        manager.adjust_spherical(&mut transform, &settings, FRAC_PI_2, 0.0);
        assert!(approx(transform.position, Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn phi_direction_for_all_mode_and_invert_combinations() {
        for (orbit, invert_y, expected_sign) in [
            (false, false, 1.0),
            (false, true, -1.0),
            (true, false, -1.0),
            (true, true, 1.0),
        ] {
            let (mut manager, mut transform, mut settings) =
                setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, orbit);
            settings.rotation.invert_y = invert_y;
            let before = manager.spherical().phi;
            manager.adjust_spherical(&mut transform, &settings, 0.0, 0.1);
            let change = manager.spherical().phi - before;
            assert!(
                (change - expected_sign * 0.1).abs() < 1e-5,
                "orbit={orbit} invert_y={invert_y} change={change}"
            );
        }
    }

    #[test]
    fn first_person_adjust_leaves_position_alone() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let (mut manager, mut transform, settings) =
            setup(position, Vec3::new(1.0, 2.0, 0.0), false);
        manager.adjust_spherical(&mut transform, &settings, 0.3, -0.2);
        manager.update_quaternion(&mut transform, &settings);
        assert_eq!(transform.position, position);
        assert!(approx(transform.forward(), manager.view_direction(&settings)));
    }

    #[test]
    fn view_direction_matches_target_in_both_modes() {
        let mut rng = StdRng::seed_from_u64(11);
        for orbit in [true, false] {
            for _ in 0..50 {
                let position = Vec3::new(
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                );
                let target = Vec3::new(
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                );
                let expected = (target - position).normalize();
                // Skip directions the pole clamp is allowed to bend.
                if expected.y.abs() > 0.999 {
                    continue;
                }
                let (manager, transform, settings) =
                    setup(position, target, orbit);
                let view = manager.view_direction(&settings);
                assert!((view.length() - 1.0).abs() < 1e-4);
                assert!(approx(view, expected), "orbit={orbit}");
                assert!(approx(transform.forward(), expected));
            }
        }
    }

    #[test]
    fn phi_never_reaches_the_poles() {
        let mut rng = StdRng::seed_from_u64(3);
        for orbit in [true, false] {
            let (mut manager, mut transform, settings) =
                setup(Vec3::new(0.0, 1.0, 4.0), Vec3::ZERO, orbit);
            for _ in 0..500 {
                manager.adjust_spherical(
                    &mut transform,
                    &settings,
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-4.0..4.0),
                );
                let phi = manager.spherical().phi;
                assert!((EPSILON..=PI - EPSILON).contains(&phi));
                assert!(manager.spherical().theta.abs() < TAU);
            }
        }
    }

    #[test]
    fn tight_azimuth_bound_survives_the_wrap() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.rotation.min_azimuthal_angle = -1.0;
        settings.rotation.max_azimuthal_angle = 1.0;

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            manager.adjust_spherical(
                &mut transform,
                &settings,
                rng.random_range(-3.0..3.0),
                0.0,
            );
            let theta = manager.spherical().theta;
            assert!((-1.0..=1.0).contains(&theta), "theta={theta}");
        }

        manager.adjust_spherical(&mut transform, &settings, -10.0, 0.0);
        assert_eq!(manager.spherical().theta, 1.0);
    }

    #[test]
    fn negative_theta_is_not_renormalized() {
        let (mut manager, mut transform, settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        manager.adjust_spherical(&mut transform, &settings, 7.0, 0.0);
        let theta = manager.spherical().theta;
        assert!(theta < 0.0);
        assert!((theta - (-7.0 % TAU)).abs() < 1e-5);
    }

    #[test]
    fn polar_limits_are_applied() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.rotation.min_polar_angle = 1.0;
        settings.rotation.max_polar_angle = 2.0;
        manager.adjust_spherical(&mut transform, &settings, 0.0, 5.0);
        assert_eq!(manager.spherical().phi, 1.0);
        manager.adjust_spherical(&mut transform, &settings, 0.0, -5.0);
        assert_eq!(manager.spherical().phi, 2.0);
    }

    #[test]
    fn zoom_clamps_at_min_distance() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, true);
        settings.zoom.min_distance = 1.0;
        settings.zoom.max_distance = 10.0;
        settings.sensitivity.zoom = 5.0;

        for _ in 0..3 {
            manager.zoom(&mut transform, &settings, -1.0);
            assert_eq!(manager.spherical().radius, 1.0);
        }
        assert!(approx(transform.position, Vec3::new(0.0, 0.0, 1.0)));

        manager.zoom(&mut transform, &settings, 1.0);
        assert_eq!(manager.spherical().radius, 6.0);
        manager.zoom(&mut transform, &settings, 1.0);
        assert_eq!(manager.spherical().radius, 10.0);
    }

    #[test]
    fn zoom_radius_stays_positive_with_collapsed_limits() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.zoom.min_distance = 0.0;
        settings.zoom.max_distance = 0.0;
        manager.zoom(&mut transform, &settings, -1.0);
        assert_eq!(manager.spherical().radius, EPSILON);
        assert!(transform.position != transform.target);
    }

    #[test]
    fn zoom_invert_swaps_direction() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.zoom.invert = true;
        settings.sensitivity.zoom = 1.0;
        manager.zoom(&mut transform, &settings, 1.0);
        assert!((manager.spherical().radius - 4.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_radius_stays_in_range_for_any_sequence() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(3.0, 1.0, 2.0), Vec3::ONE, true);
        settings.zoom.min_distance = 0.5;
        settings.zoom.max_distance = 20.0;
        settings.sensitivity.zoom = 1.5;

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..300 {
            let sign = [-1.0, 0.0, 1.0][rng.random_range(0..3)];
            manager.zoom(&mut transform, &settings, sign);
            let radius = manager.spherical().radius;
            assert!((0.5..=20.0).contains(&radius));
        }
    }

    #[test]
    fn zoom_is_a_no_op_in_first_person_or_when_disabled() {
        let first_person =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, false);
        let mut disabled = setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        disabled.2.zoom.enabled = false;

        for (mut manager, mut transform, settings) in [first_person, disabled] {
            let before = (manager.spherical(), transform);
            for sign in [1.0, -1.0] {
                manager.zoom(&mut transform, &settings, sign);
                assert_eq!((manager.spherical(), transform), before);
            }
        }
    }

    #[test]
    fn pivot_offset_shifts_the_look_at_point() {
        let (mut manager, mut transform, mut settings) =
            setup(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, true);
        settings.rotation.pivot_offset = Vec3::new(0.0, 5.0, 0.0);
        manager.update_quaternion(&mut transform, &settings);
        let expected = Vec3::new(0.0, 5.0, -5.0).normalize();
        assert!(approx(transform.forward(), expected));
    }
}
