// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit and first-person controls for cameras and scene objects.
//!
//! The controls keep a position, an orientation, and a look-at target in
//! sync with a spherical-coordinate state, and move the rig along its
//! view-relative axes while movement keys are held.
//!
//! # Key entry points
//!
//! - [`controls::SpatialControls`] - the controller that owns the transform
//! - [`controls::RotationManager`] / [`controls::TranslationManager`] - the
//!   rotation and movement halves, usable on their own
//! - [`settings::Settings`] - runtime configuration (mode, rotation limits,
//!   sensitivities, zoom range) with JSON/TOML persistence
//! - [`input::InputProcessor`] - raw pointer and key events to
//!   [`controls::ControlsCommand`]s
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use spatial_controls::controls::{
//!     ControlsCommand, Direction, SpatialControls, Transform,
//! };
//! use spatial_controls::settings::Settings;
//!
//! let mut controls = SpatialControls::new(
//!     Transform::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
//!     Settings::default(),
//! );
//! controls.execute(ControlsCommand::Move {
//!     direction: Direction::Left,
//!     active: true,
//! });
//! controls.update(1.0 / 60.0);
//! assert!(controls.position().x < 0.0);
//! ```

pub mod controls;
pub mod error;
pub mod input;
pub mod math;
pub mod settings;
pub mod util;

pub use controls::{ControlsCommand, SpatialControls};
pub use error::ControlsError;
pub use settings::Settings;
