use glam::{Mat4, Quat, Vec2, Vec3};

use super::{
    ControlsCommand, Direction, MovementState, RotationManager, Transform,
    TranslationManager,
};
use crate::math::Spherical;
use crate::settings::Settings;
use crate::util::frame_timing::FrameTiming;

/// First-person / orbit controls for a camera or object.
///
/// Owns the shared [`Transform`] and lends it to the rotation and
/// translation managers for every operation, so both always act on the same
/// position, orientation, and target.
#[derive(Debug, Clone)]
pub struct SpatialControls {
    transform: Transform,
    settings: Settings,
    rotation: RotationManager,
    translation: TranslationManager,
    timing: FrameTiming,
    enabled: bool,
}

impl Default for SpatialControls {
    fn default() -> Self {
        Self::new(Transform::default(), Settings::default())
    }
}

impl SpatialControls {
    /// Take ownership of `transform` and derive its orientation from its
    /// position and target.
    #[must_use]
    pub fn new(transform: Transform, settings: Settings) -> Self {
        let mut controls = Self {
            transform,
            settings,
            rotation: RotationManager::new(),
            translation: TranslationManager::new(),
            timing: FrameTiming::default(),
            enabled: true,
        };
        let target = controls.transform.target;
        controls.look_at(target);
        controls
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The controlled transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Current orientation.
    #[must_use]
    pub fn quaternion(&self) -> Quat {
        self.transform.quaternion
    }

    /// Stored look-at point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.transform.target
    }

    /// The point the controls are effectively looking at: the orbit pivot,
    /// or one unit ahead of the position in first person.
    #[must_use]
    pub fn effective_target(&self) -> Vec3 {
        if self.settings.general.orbit {
            self.transform.target
        } else {
            self.transform.position + self.view_direction()
        }
    }

    /// Current spherical state.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.rotation.spherical()
    }

    /// Unit view direction.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.rotation.view_direction(&self.settings)
    }

    /// View matrix for a camera driven by these controls.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.view_matrix()
    }

    /// Current movement flags.
    #[must_use]
    pub fn movement_state(&self) -> &MovementState {
        self.translation.movement_state()
    }

    /// Active settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether input and updates are processed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Frame timer used by [`tick`](Self::tick).
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Replace the settings. A change of mode is reconciled first; the
    /// orientation is always re-derived afterwards.
    pub fn set_settings(&mut self, mut settings: Settings) {
        log::debug!("replacing control settings");
        let orbit = settings.general.orbit;
        settings.general.orbit = self.settings.general.orbit;
        self.settings = settings;

        if orbit == self.settings.general.orbit {
            let target = self.effective_target();
            self.look_at(target);
        } else {
            self.set_orbit(orbit);
        }
    }

    /// Switch between orbit (`true`) and first-person (`false`) mode while
    /// keeping the apparent view.
    ///
    /// Entering orbit turns the current position into the pivot and steps
    /// back along the view direction. Leaving orbit moves the position onto
    /// the pivot and looks straight ahead along the current orientation.
    pub fn set_orbit(&mut self, orbit: bool) {
        if self.settings.general.orbit == orbit {
            return;
        }

        let previous_target = self.effective_target();
        let transform = &mut self.transform;
        if orbit {
            let offset = previous_target - transform.position;
            transform.target = transform.position;
            transform.position -= offset;
        } else {
            transform.position = transform.target;
            transform.target = transform.position + transform.forward();
        }

        self.settings.general.orbit = orbit;
        log::debug!(
            "switched to {} mode at {}",
            if orbit { "orbit" } else { "first-person" },
            self.transform.position
        );

        let target = self.transform.target;
        self.look_at(target);
    }

    /// Enable or disable input processing. Disabling releases every held
    /// direction.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.reset_movement();
            self.timing.reset();
        }
        log::debug!("controls {}", if enabled { "enabled" } else { "disabled" });
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Look at `point` and rebuild the spherical state.
    pub fn look_at(&mut self, point: Vec3) {
        self.rotation.look_at(&mut self.transform, &self.settings, point);
    }

    /// Jump to `point` and re-derive the dependent state: in orbit the
    /// position follows the moved pivot, in first person the target is
    /// placed one unit ahead.
    pub fn move_to(&mut self, point: Vec3) {
        self.translation.move_to(&mut self.transform, &self.settings, point);
        if self.settings.general.orbit {
            self.rotation.adjust_spherical(
                &mut self.transform,
                &self.settings,
                0.0,
                0.0,
            );
            self.rotation.update_quaternion(&mut self.transform, &self.settings);
        } else {
            self.sync_first_person_target();
        }
    }

    /// Move the position while keeping the current look-at point.
    pub fn set_position(&mut self, position: Vec3) {
        let target = self.effective_target();
        self.transform.position = position;
        self.look_at(target);
    }

    /// Rotate by a pointer delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        let scaled = delta * self.settings.sensitivity.rotation;
        self.rotation.adjust_spherical(
            &mut self.transform,
            &self.settings,
            scaled.x,
            scaled.y,
        );
        self.rotation.update_quaternion(&mut self.transform, &self.settings);
        self.sync_first_person_target();
    }

    /// Zoom one step. See [`RotationManager::zoom`].
    pub fn zoom(&mut self, sign: f32) {
        self.rotation.zoom(&mut self.transform, &self.settings, sign);
    }

    /// Hold or release a movement direction.
    pub fn set_movement(&mut self, direction: Direction, active: bool) {
        self.translation.movement_state_mut().set(direction, active);
    }

    /// Release every held direction.
    pub fn reset_movement(&mut self) {
        self.translation.movement_state_mut().reset();
    }

    /// Run a command. Ignored while disabled.
    pub fn execute(&mut self, command: ControlsCommand) {
        if !self.enabled {
            log::trace!("controls disabled, dropping {command:?}");
            return;
        }
        match command {
            ControlsCommand::Rotate { delta } => self.rotate(delta),
            ControlsCommand::Zoom { sign } => self.zoom(sign),
            ControlsCommand::LookAt { point } => self.look_at(point),
            ControlsCommand::Move { direction, active } => {
                self.set_movement(direction, active);
            }
            ControlsCommand::MoveTo { point } => self.move_to(point),
            ControlsCommand::ResetMovement => self.reset_movement(),
            ControlsCommand::SetOrbit { orbit } => self.set_orbit(orbit),
            ControlsCommand::ToggleOrbit => {
                self.set_orbit(!self.settings.general.orbit);
            }
        }
    }

    /// Advance by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }
        self.rotation.update(delta_time);
        self.translation.update(
            &mut self.transform,
            &self.settings,
            delta_time,
        );
        self.sync_first_person_target();
    }

    /// In first person the stored target stays one unit ahead of the
    /// position.
    fn sync_first_person_target(&mut self) {
        if !self.settings.general.orbit {
            self.transform.target =
                self.transform.position + self.view_direction();
        }
    }

    /// Advance by the wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let delta_time = self.timing.advance();
        self.update(delta_time);
    }
}
