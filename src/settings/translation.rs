use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Translation", inline)]
#[serde(default, rename_all = "camelCase")]
/// Keyboard-driven movement toggle.
pub struct TranslationSettings {
    /// Whether held movement keys move the position each frame.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
