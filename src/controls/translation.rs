//! Held-key movement along the view-relative axes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Transform;
use crate::settings::Settings;

/// One of the six movement directions, relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Along local -Z.
    Forward,
    /// Along local +Z.
    Backward,
    /// Along local -X.
    Left,
    /// Along local +X.
    Right,
    /// Along local +Y.
    Up,
    /// Along local -Y.
    Down,
}

/// Which movement directions are currently held.
///
/// Opposing flags may be set together; [`TranslationManager::translate`]
/// resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MovementState {
    /// Move forward.
    pub forward: bool,
    /// Move backward.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Move up.
    pub up: bool,
    /// Move down.
    pub down: bool,
}

impl MovementState {
    /// Set or clear the flag for `direction`.
    pub fn set(&mut self, direction: Direction, active: bool) {
        let flag = match direction {
            Direction::Forward => &mut self.forward,
            Direction::Backward => &mut self.backward,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        };
        *flag = active;
    }

    /// Clear every flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any flag is set.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        *self != Self::default()
    }
}

/// Integrates the movement state into the shared transform.
#[derive(Debug, Clone, Default)]
pub struct TranslationManager {
    movement: MovementState,
}

impl TranslationManager {
    /// Create a manager with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current movement flags.
    #[must_use]
    pub fn movement_state(&self) -> &MovementState {
        &self.movement
    }

    /// Mutable movement flags, toggled by the host on key events.
    pub fn movement_state_mut(&mut self) -> &mut MovementState {
        &mut self.movement
    }

    /// Move by `distance` along the local `axis`. In orbit mode the target
    /// moves with the position so the rig keeps its shape.
    pub fn translate_on_axis(
        &self,
        transform: &mut Transform,
        settings: &Settings,
        axis: Vec3,
        distance: f32,
    ) {
        let delta = transform.quaternion * axis * distance;
        transform.position += delta;
        if settings.general.orbit {
            transform.target += delta;
        }
    }

    /// Apply one time step of movement.
    ///
    /// When both flags of a pair are held, backward, right, and up win over
    /// forward, left, and down.
    pub fn translate(
        &self,
        transform: &mut Transform,
        settings: &Settings,
        delta_time: f32,
    ) {
        let state = &self.movement;
        let step = delta_time * settings.sensitivity.translation;

        if state.backward {
            self.translate_on_axis(transform, settings, Vec3::Z, step);
        } else if state.forward {
            self.translate_on_axis(transform, settings, Vec3::Z, -step);
        }

        if state.right {
            self.translate_on_axis(transform, settings, Vec3::X, step);
        } else if state.left {
            self.translate_on_axis(transform, settings, Vec3::X, -step);
        }

        if state.up {
            self.translate_on_axis(transform, settings, Vec3::Y, step);
        } else if state.down {
            self.translate_on_axis(transform, settings, Vec3::Y, -step);
        }
    }

    /// Per-frame hook; moves only when translation is enabled.
    pub fn update(
        &self,
        transform: &mut Transform,
        settings: &Settings,
        delta_time: f32,
    ) {
        if settings.translation.enabled {
            self.translate(transform, settings, delta_time);
        }
    }

    /// Jump to `point`: the target in orbit mode, the position in first
    /// person. Dependent state is re-derived by the caller.
    pub fn move_to(
        &self,
        transform: &mut Transform,
        settings: &Settings,
        point: Vec3,
    ) {
        if settings.general.orbit {
            transform.target = point;
        } else {
            transform.position = point;
        }
    }
}
