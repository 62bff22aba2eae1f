//! Orbit and first-person controls.
//!
//! [`SpatialControls`] owns the controlled [`Transform`] and coordinates a
//! [`RotationManager`] (spherical orientation and zoom) with a
//! [`TranslationManager`] (held-key movement). Mode switches go through
//! [`SpatialControls::set_orbit`], which keeps the apparent view.

mod command;
mod controller;
mod mode;
mod rotation;
mod transform;
mod translation;

pub use command::ControlsCommand;
pub use controller::SpatialControls;
pub use mode::ControlMode;
pub use rotation::RotationManager;
pub use transform::Transform;
pub use translation::{Direction, MovementState, TranslationManager};
