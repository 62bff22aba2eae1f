use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "General", inline)]
#[serde(default, rename_all = "camelCase")]
/// Mode selection.
pub struct GeneralSettings {
    /// `true` orbits around the target (third person), `false` moves the
    /// position directly (first person).
    #[schemars(title = "Orbit")]
    pub orbit: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self { orbit: true }
    }
}
