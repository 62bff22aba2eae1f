//! Input handling: event types, key bindings, and the input processor that
//! converts raw window events into [`ControlsCommand`]s.
//!
//! [`ControlsCommand`]: crate::controls::ControlsCommand

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into control commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::Action;
pub use processor::{InputProcessor, KeyBindings};
