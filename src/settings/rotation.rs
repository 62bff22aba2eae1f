use std::f32::consts::PI;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bound;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default, rename_all = "camelCase")]
/// Orientation limits and axis conventions.
pub struct RotationSettings {
    /// World up direction used to build the look-at basis.
    #[schemars(skip)]
    pub up: Vec3,
    /// Offset of the look-at point from the orbit target.
    #[schemars(skip)]
    pub pivot_offset: Vec3,
    /// Lower azimuth limit in radians. Unbounded by default.
    #[serde(with = "bound::lower")]
    #[schemars(title = "Min Azimuthal Angle", with = "Option<f32>")]
    pub min_azimuthal_angle: f32,
    /// Upper azimuth limit in radians. Unbounded by default.
    #[serde(with = "bound::upper")]
    #[schemars(title = "Max Azimuthal Angle", with = "Option<f32>")]
    pub max_azimuthal_angle: f32,
    /// Lower polar limit in radians.
    #[schemars(title = "Min Polar Angle", range(min = 0.0, max = 3.1416))]
    pub min_polar_angle: f32,
    /// Upper polar limit in radians.
    #[schemars(title = "Max Polar Angle", range(min = 0.0, max = 3.1416))]
    pub max_polar_angle: f32,
    /// Reverse horizontal rotation.
    #[schemars(title = "Invert X")]
    pub invert_x: bool,
    /// Reverse vertical rotation.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            up: Vec3::Y,
            pivot_offset: Vec3::ZERO,
            min_azimuthal_angle: f32::NEG_INFINITY,
            max_azimuthal_angle: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            invert_x: false,
            invert_y: false,
        }
    }
}
