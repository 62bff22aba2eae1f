//! The controls' complete interactive vocabulary.
//!
//! Input handling (see [`crate::input`]) turns raw events into
//! `ControlsCommand`s; hosts can also construct them directly and pass them
//! to [`SpatialControls::execute`](super::SpatialControls::execute).

use glam::{Vec2, Vec3};

use super::Direction;

/// A discrete or parameterized operation on the controls.
///
/// ```ignore
/// controls.execute(ControlsCommand::Zoom { sign: -1.0 });
/// controls.execute(ControlsCommand::Move {
///     direction: Direction::Forward,
///     active: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlsCommand {
    // ── Rotation ────────────────────────────────────────────────────
    /// Rotate by a pointer movement delta in pixels. Scaled by the
    /// rotation sensitivity.
    Rotate {
        /// Horizontal and vertical pointer delta.
        delta: Vec2,
    },

    /// Zoom one step; negative moves closer, positive moves away.
    Zoom {
        /// Step direction in `{-1, 0, 1}`.
        sign: f32,
    },

    /// Look at a world-space point.
    LookAt {
        /// Point to face.
        point: Vec3,
    },

    // ── Translation ─────────────────────────────────────────────────
    /// Start or stop moving in a direction.
    Move {
        /// Which direction.
        direction: Direction,
        /// `true` while the direction is held.
        active: bool,
    },

    /// Jump the rig to a point (the target in orbit mode).
    MoveTo {
        /// Destination.
        point: Vec3,
    },

    /// Release every held direction.
    ResetMovement,

    // ── Mode ────────────────────────────────────────────────────────
    /// Switch between orbit and first-person mode.
    SetOrbit {
        /// `true` for orbit.
        orbit: bool,
    },

    /// Flip between orbit and first-person mode.
    ToggleOrbit,
}
