use std::f32::consts::PI;

use glam::Vec3;

use super::EPSILON;

/// Spherical coordinates with a Y-up convention.
///
/// `phi` is the polar angle measured from +Y and `theta` the azimuth
/// measured from +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle in radians.
    pub phi: f32,
    /// Azimuthal angle in radians.
    pub theta: f32,
}

impl Default for Spherical {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Spherical {
    /// Create spherical coordinates from raw components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a Cartesian vector. A zero vector yields zero angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Cartesian vector described by these coordinates.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Unit vector pointing in the same direction, ignoring the radius.
    #[must_use]
    pub fn direction(self) -> Vec3 {
        Self { radius: 1.0, ..self }.to_vec3()
    }

    /// Keep `phi` away from the exact poles.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(EPSILON, PI - EPSILON);
    }
}
