//! Converts raw platform events into camera-controller calls.
//!
//! The windowing layer reports cursor motion, button changes, and wheel
//! deltas as separate events. The `InputProcessor` remembers the last
//! cursor position and the set of held buttons so each event can be turned
//! into the pointer call the [`CameraController`] expects.

use super::event::{ButtonSet, InputEvent};
use crate::camera::{CameraController, KeyResponse};
use crate::options::KeybindingOptions;

/// Tracks transient pointer state and the key-binding map.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if input.handle_event(event, &mut controller) {
///     window.request_redraw();
/// }
///
/// if let Some(response) = input.handle_key_press("KeyW", &mut controller) {
///     apply(response);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position in whole physical pixels.
    cursor: (i32, i32),
    /// Buttons currently held down.
    held: ButtonSet,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Last cursor position seen.
    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Buttons currently held.
    #[must_use]
    pub fn held_buttons(&self) -> ButtonSet {
        self.held
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Process one pointer event. Returns `true` when the frame needs a
    /// redraw.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        controller: &mut CameraController,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                // Pixel positions are integers to the controller.
                self.cursor = (x as i32, y as i32);
                controller.on_pointer_move(self.cursor.0, self.cursor.1, self.held)
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.held.insert(button);
                    controller.on_pointer_down(button, self.cursor.0, self.cursor.1);
                } else {
                    self.held.remove(button);
                    controller.on_pointer_up(button);
                }
                false
            }
            InputEvent::Scroll { horizontal, .. } => controller.on_scroll(horizontal),
        }
    }

    /// Look up a key string (winit `KeyCode` debug format, e.g. `"KeyW"`)
    /// and apply the bound action to the controller.
    ///
    /// Returns `None` for unbound keys.
    pub fn handle_key_press(
        &self,
        key: &str,
        controller: &mut CameraController,
    ) -> Option<KeyResponse> {
        let action = self.key_bindings.lookup(key)?;
        log::debug!("key {key} -> {action:?}");
        Some(controller.on_key(action))
    }
}
