use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sensitivity", inline)]
#[serde(default, rename_all = "camelCase")]
/// Scalars applied to raw input deltas.
pub struct SensitivitySettings {
    /// Radians per pixel of pointer movement.
    #[schemars(title = "Rotation", range(min = 0.0001, max = 0.05), extend("step" = 0.0001))]
    pub rotation: f32,
    /// World units per second of held movement.
    #[schemars(title = "Translation", range(min = 0.01, max = 100.0), extend("step" = 0.01))]
    pub translation: f32,
    /// World units per zoom step.
    #[schemars(title = "Zoom", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub zoom: f32,
}

impl Default for SensitivitySettings {
    fn default() -> Self {
        Self { rotation: 0.0025, translation: 1.0, zoom: 0.1 }
    }
}
