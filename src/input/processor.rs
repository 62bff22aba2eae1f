//! Converts raw platform events into control commands.
//!
//! The `InputProcessor` owns the transient input state (primary button,
//! pointer lock, held keys) and the key-binding map. It sits between raw
//! window events and [`SpatialControls::execute`].
//!
//! [`SpatialControls::execute`]: crate::controls::SpatialControls::execute

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::keyboard::Action;
use crate::controls::ControlsCommand;

/// Maps physical key strings to [`Action`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowUp"`, `"Space"`, etc. Several keys may share an action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), Action::MoveForward),
            ("ArrowUp".into(), Action::MoveForward),
            ("KeyS".into(), Action::MoveBackward),
            ("ArrowDown".into(), Action::MoveBackward),
            ("KeyA".into(), Action::MoveLeft),
            ("ArrowLeft".into(), Action::MoveLeft),
            ("KeyD".into(), Action::MoveRight),
            ("ArrowRight".into(), Action::MoveRight),
            ("Space".into(), Action::MoveUp),
            ("KeyC".into(), Action::MoveDown),
            ("Equal".into(), Action::ZoomIn),
            ("Minus".into(), Action::ZoomOut),
            ("KeyV".into(), Action::ToggleOrbit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings with nothing bound.
    #[must_use]
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        action: Action,
    ) -> Option<Action> {
        self.bindings.insert(key.into(), action)
    }

    /// Remove the binding for `key`, returning its action.
    pub fn unbind(&mut self, key: &str) -> Option<Action> {
        self.bindings.remove(key)
    }

    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Keys bound to `action`, sorted.
    #[must_use]
    pub fn keys_for(&self, action: Action) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ControlsCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     controls.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key("KeyW", true) {
///     controls.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Whether the primary mouse button is currently held.
    primary_pressed: bool,
    /// Rotate on every pointer move, regardless of buttons.
    pointer_locked: bool,
    /// Keys currently held, for key-repeat suppression.
    held_keys: HashSet<String>,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Whether the pointer is locked (every movement rotates).
    #[must_use]
    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Lock or unlock the pointer.
    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Forget all held keys and buttons, e.g. when the window loses focus.
    /// Returns the command that releases any movement still in progress.
    pub fn release_all(&mut self) -> ControlsCommand {
        self.held_keys.clear();
        self.primary_pressed = false;
        ControlsCommand::ResetMovement
    }

    /// Process a key transition and return the bound command, if any.
    ///
    /// A repeated press of a key that is already held yields nothing, as
    /// does releasing a key that was never seen pressed.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<ControlsCommand> {
        let action = self.key_bindings.lookup(key)?;
        if pressed {
            if !self.held_keys.insert(key.to_owned()) {
                return None;
            }
        } else if !self.held_keys.remove(key) {
            return None;
        }
        action.to_command(pressed)
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<ControlsCommand> {
        match event {
            InputEvent::PointerMoved { dx, dy } => {
                if self.primary_pressed || self.pointer_locked {
                    Some(ControlsCommand::Rotate { delta: Vec2::new(dx, dy) })
                } else {
                    None
                }
            }
            InputEvent::PointerButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.primary_pressed = pressed;
                }
                None
            }
            InputEvent::Wheel { delta } => {
                Some(ControlsCommand::Zoom { sign: wheel_sign(delta) })
            }
        }
    }
}

/// Zoom step for a wheel delta: scrolling up (positive) moves closer.
fn wheel_sign(delta: f32) -> f32 {
    if delta > 0.0 {
        -1.0
    } else if delta < 0.0 {
        1.0
    } else {
        0.0
    }
}
