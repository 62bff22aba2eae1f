/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ControlsCommand`](crate::controls::ControlsCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor
///     .handle_event(InputEvent::PointerMoved { dx: 4.0, dy: -2.0 })
/// {
///     controls.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion since the previous event.
    PointerMoved {
        /// Horizontal delta in physical pixels.
        dx: f32,
        /// Vertical delta in physical pixels.
        dy: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Wheel {
        /// Scroll amount; only the sign is used.
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
