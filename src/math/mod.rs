//! Math helpers layered on top of `glam`.
//!
//! Spherical coordinates parametrize both the first-person view direction
//! and the orbit offset; the look-at helper turns a direction into the
//! orientation quaternion.

/// Look-at rotation with degenerate-input guards.
pub mod look_at;
/// Radius/polar/azimuth coordinates.
pub mod spherical;

pub use look_at::look_at_rotation;
pub use spherical::Spherical;

/// Smallest radius and pole distance the controls ever allow.
pub const EPSILON: f32 = 1e-6;
