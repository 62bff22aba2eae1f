//! Control settings with JSON and TOML persistence.
//!
//! Everything the controls read at runtime (mode, rotation limits, axis
//! inversion, sensitivities, zoom range) lives here. The managers only ever
//! read settings; hosts change them through
//! [`SpatialControls::set_settings`](crate::controls::SpatialControls::set_settings)
//! so that mode changes are reconciled.

mod bound;
mod general;
mod rotation;
mod sensitivity;
mod translation;
mod zoom;

use std::path::Path;

pub use general::GeneralSettings;
pub use rotation::RotationSettings;
use schemars::JsonSchema;
pub use sensitivity::SensitivitySettings;
use serde::{Deserialize, Serialize};
pub use translation::TranslationSettings;
pub use zoom::ZoomSettings;

use crate::controls::ControlMode;
use crate::error::ControlsError;
use crate::math::EPSILON;

/// Top-level settings container. All sections use `#[serde(default)]` so
/// partial files (e.g. only overriding `zoom`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Mode selection.
    pub general: GeneralSettings,
    /// Orientation limits and axis conventions.
    pub rotation: RotationSettings,
    /// Input scaling.
    pub sensitivity: SensitivitySettings,
    /// Held-key movement.
    pub translation: TranslationSettings,
    /// Orbit distance limits.
    pub zoom: ZoomSettings,
}

impl Settings {
    /// Mode-specific view of these settings.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        if self.general.orbit {
            ControlMode::ThirdPerson { pivot_offset: self.rotation.pivot_offset }
        } else {
            ControlMode::FirstPerson
        }
    }

    /// Generate JSON Schema describing the UI-exposed settings.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Settings)
    }

    /// Check that ranges are ordered and scalars are usable.
    pub fn validate(&self) -> Result<(), ControlsError> {
        let rotation = &self.rotation;
        check_range(
            "azimuthal angle",
            rotation.min_azimuthal_angle,
            rotation.max_azimuthal_angle,
        )?;
        check_range(
            "polar angle",
            rotation.min_polar_angle,
            rotation.max_polar_angle,
        )?;
        check_range(
            "zoom distance",
            self.zoom.min_distance,
            self.zoom.max_distance,
        )?;
        if self.zoom.max_distance < EPSILON {
            return Err(ControlsError::InvalidSettings(format!(
                "zoom max distance {} is below the minimum radius {EPSILON}",
                self.zoom.max_distance
            )));
        }

        let up = rotation.up;
        if !up.is_finite() || up.length_squared() == 0.0 {
            return Err(ControlsError::InvalidSettings(format!(
                "up vector {up} has no direction"
            )));
        }

        let sensitivity = &self.sensitivity;
        for (name, value) in [
            ("rotation", sensitivity.rotation),
            ("translation", sensitivity.translation),
            ("zoom", sensitivity.zoom),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ControlsError::InvalidSettings(format!(
                    "{name} sensitivity must be a finite positive \
                     number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ControlsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, ControlsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file. `.toml` files are read as TOML, anything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = if is_toml(path) {
            toml::from_str(&content)
                .map_err(|e| ControlsError::SettingsParse(e.to_string()))?
        } else {
            serde_json::from_str(&content)?
        };
        if let Err(e) = settings.validate() {
            log::warn!("rejecting settings from {}: {e}", path.display());
            return Err(e);
        }
        Ok(settings)
    }

    /// Save settings to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ControlsError> {
        let content = if is_toml(path) {
            toml::to_string_pretty(self)
                .map_err(|e| ControlsError::SettingsParse(e.to_string()))?
        } else {
            self.to_json()?
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::debug!("saved control settings to {}", path.display());
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn check_range(name: &str, min: f32, max: f32) -> Result<(), ControlsError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ControlsError::InvalidSettings(format!(
            "{name} range is empty: min {min} > max {max}"
        )));
    }
    Ok(())
}
