use serde::{Deserialize, Serialize};

use crate::controls::{ControlsCommand, Direction};

/// Control actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so binding files stay readable:
/// ```toml
/// [bindings]
/// KeyW = "move_forward"
/// KeyV = "toggle_orbit"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Hold to move forward.
    MoveForward,
    /// Hold to move backward.
    MoveBackward,
    /// Hold to strafe left.
    MoveLeft,
    /// Hold to strafe right.
    MoveRight,
    /// Hold to move up.
    MoveUp,
    /// Hold to move down.
    MoveDown,
    /// Zoom one step towards the orbit target.
    ZoomIn,
    /// Zoom one step away from the orbit target.
    ZoomOut,
    /// Flip between orbit and first-person mode.
    ToggleOrbit,
}

impl Action {
    /// Movement direction for held actions, `None` for one-shot actions.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveForward => Some(Direction::Forward),
            Self::MoveBackward => Some(Direction::Backward),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::ZoomIn | Self::ZoomOut | Self::ToggleOrbit => None,
        }
    }

    /// Command for a key transition. Held actions report both edges;
    /// one-shot actions fire on press only.
    #[must_use]
    pub const fn to_command(self, pressed: bool) -> Option<ControlsCommand> {
        if let Some(direction) = self.direction() {
            return Some(ControlsCommand::Move { direction, active: pressed });
        }
        if !pressed {
            return None;
        }
        match self {
            Self::ZoomIn => Some(ControlsCommand::Zoom { sign: -1.0 }),
            Self::ZoomOut => Some(ControlsCommand::Zoom { sign: 1.0 }),
            Self::ToggleOrbit => Some(ControlsCommand::ToggleOrbit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_actions_report_both_edges() {
        assert_eq!(
            Action::MoveLeft.to_command(true),
            Some(ControlsCommand::Move {
                direction: Direction::Left,
                active: true
            })
        );
        assert_eq!(
            Action::MoveLeft.to_command(false),
            Some(ControlsCommand::Move {
                direction: Direction::Left,
                active: false
            })
        );
    }

    #[test]
    fn one_shot_actions_fire_on_press_only() {
        for action in [Action::ZoomIn, Action::ZoomOut, Action::ToggleOrbit] {
            assert!(action.to_command(true).is_some());
            assert_eq!(action.to_command(false), None);
        }
        assert_eq!(
            Action::ZoomIn.to_command(true),
            Some(ControlsCommand::Zoom { sign: -1.0 })
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Action::MoveForward).unwrap();
        assert_eq!(json, "\"move_forward\"");
        let back: Action = serde_json::from_str("\"toggle_orbit\"").unwrap();
        assert_eq!(back, Action::ToggleOrbit);
    }
}
