/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// forwards them to the [`CameraController`](crate::camera::CameraController).
///
/// # Example
///
/// ```
/// # use vao_demos::camera::CameraController;
/// # use vao_demos::input::{InputEvent, InputProcessor, MouseButton};
/// let mut controller = CameraController::default();
/// let mut input = InputProcessor::default();
/// let _ = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 }, &mut controller);
/// let _ = input.handle_event(
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
///     &mut controller,
/// );
/// let redraw =
///     input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 115.0 }, &mut controller);
/// assert!(redraw);
/// assert_eq!(controller.state().yaw_deg, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Wheel or trackpad scroll.
    Scroll {
        /// Horizontal component (drives zoom).
        horizontal: f32,
        /// Vertical component (currently unused).
        vertical: f32,
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
    /// Any other button the platform reports.
    Other,
}

impl MouseButton {
    const fn bit(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 1 << 1,
            Self::Middle => 1 << 2,
            Self::Other => 1 << 3,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

/// The set of mouse buttons currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// No buttons held.
    pub const EMPTY: Self = Self(0);

    /// Set containing exactly `button`.
    #[must_use]
    pub const fn only(button: MouseButton) -> Self {
        Self(button.bit())
    }

    /// Mark `button` as held.
    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= button.bit();
    }

    /// Mark `button` as released.
    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !button.bit();
    }

    /// Whether `button` is held.
    #[must_use]
    pub const fn contains(self, button: MouseButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Whether `button` is held and nothing else is.
    #[must_use]
    pub const fn is_only(self, button: MouseButton) -> bool {
        self.0 == button.bit()
    }

    /// Whether nothing is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_set_tracks_presses() {
        let mut held = ButtonSet::EMPTY;
        held.insert(MouseButton::Left);
        assert!(held.is_only(MouseButton::Left));
        held.insert(MouseButton::Right);
        assert!(held.contains(MouseButton::Right));
        assert!(!held.is_only(MouseButton::Left));
        held.remove(MouseButton::Left);
        assert_eq!(held, ButtonSet::only(MouseButton::Right));
        held.remove(MouseButton::Right);
        assert!(held.is_empty());
    }
}
