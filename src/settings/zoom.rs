use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bound;
use crate::math::EPSILON;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default, rename_all = "camelCase")]
/// Orbit distance limits. Zoom only applies in orbit mode.
pub struct ZoomSettings {
    /// Whether zoom input changes the orbit distance.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Swap the direction of zoom input.
    #[schemars(title = "Invert")]
    pub invert: bool,
    /// Closest allowed distance to the target.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min_distance: f32,
    /// Farthest allowed distance from the target. Unbounded by default.
    #[serde(with = "bound::upper")]
    #[schemars(title = "Max Distance", with = "Option<f32>")]
    pub max_distance: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            invert: false,
            min_distance: EPSILON,
            max_distance: f32::INFINITY,
        }
    }
}

impl ZoomSettings {
    /// Effective distance range, with both ends floored at [`EPSILON`].
    #[must_use]
    pub fn distance_range(&self) -> (f32, f32) {
        let min = self.min_distance.max(EPSILON);
        (min, self.max_distance.max(min))
    }
}
