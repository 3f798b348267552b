use crate::input::{ButtonSet, KeyAction, MouseButton};
use crate::math::{Mat4, Vec3};
use crate::options::CameraOptions;
use crate::renderer::FillMode;

/// Accumulated view orientation. The single source of truth for the model
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Rotation about +Y in degrees. Never range-reduced.
    pub yaw_deg: f32,
    /// Rotation about +X in degrees. Never range-reduced.
    pub pitch_deg: f32,
    /// Translation applied after rotation.
    pub pan_offset: Vec3,
    /// Extra translation along Z from the wheel.
    pub zoom_delta: f32,
}

/// Transient drag bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerDragState {
    /// Primary button went down and has not been released.
    pub rotating: bool,
    /// Secondary button went down and has not been released.
    pub panning: bool,
    /// Rotation drag origin.
    pub last_x: i32,
    /// Rotation drag origin.
    pub last_y: i32,
    /// Pan drag origin.
    pub pan_x: i32,
    /// Pan drag origin.
    pub pan_y: i32,
}

/// What the host should do after a bound key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Leave the event loop.
    Exit,
    /// Switch the rasterizer fill mode.
    SetFillMode(FillMode),
    /// Enter (`true`) or leave (`false`) fullscreen.
    SetFullscreen(bool),
    /// Camera state changed; redraw.
    Redraw,
}

/// Mouse-driven orbit/pan/zoom controller.
///
/// Feed it pointer, wheel, and key events; read the model transform back
/// with [`compute_transform`](Self::compute_transform).
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    drag: PointerDragState,
    rotate_factor: f32,
    pan_increment: f32,
    zoom_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl CameraController {
    /// Controller with default factors and a zeroed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller whose rotation, pan, and zoom factors come from `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            state: CameraState::default(),
            drag: PointerDragState::default(),
            rotate_factor: options.rotate_factor,
            pan_increment: options.pan_increment,
            zoom_step: options.zoom_step,
        }
    }

    /// Current accumulated state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current drag flags and origins.
    #[must_use]
    pub fn drag(&self) -> &PointerDragState {
        &self.drag
    }

    /// Primary starts a rotation drag, secondary starts a pan drag.
    pub fn on_pointer_down(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                self.drag.rotating = true;
                self.drag.last_x = x;
                self.drag.last_y = y;
            }
            MouseButton::Right => {
                self.drag.panning = true;
                self.drag.pan_x = x;
                self.drag.pan_y = y;
            }
            MouseButton::Middle | MouseButton::Other => {}
        }
    }

    /// Clear the flag for `button`.
    pub fn on_pointer_up(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.drag.rotating = false,
            MouseButton::Right => self.drag.panning = false,
            MouseButton::Middle | MouseButton::Other => {}
        }
    }

    /// Apply a pointer move. `held` is the full set of buttons down at the
    /// time of the move; a drag only applies when its button is the only
    /// one held.
    ///
    /// Returns `true` when the state changed.
    pub fn on_pointer_move(&mut self, x: i32, y: i32, held: ButtonSet) -> bool {
        if self.drag.rotating && held.is_only(MouseButton::Left) {
            let dx = (x - self.drag.last_x) as f32;
            let dy = (y - self.drag.last_y) as f32;
            self.state.pitch_deg += self.rotate_factor * dy;
            self.state.yaw_deg += self.rotate_factor * dx;
            self.drag.last_x = x;
            self.drag.last_y = y;
            true
        } else if self.drag.panning && held.is_only(MouseButton::Right) {
            let dx = (x - self.drag.pan_x) as f32;
            let dy = (y - self.drag.pan_y) as f32;
            self.state.pan_offset.x += self.pan_increment * dx;
            // Screen Y grows downward.
            self.state.pan_offset.y -= self.pan_increment * dy;
            self.drag.pan_x = x;
            self.drag.pan_y = y;
            true
        } else {
            false
        }
    }

    /// Step zoom by the sign of the horizontal wheel delta.
    ///
    /// Always requests a redraw, even for a zero delta.
    pub fn on_scroll(&mut self, horizontal: f32) -> bool {
        if horizontal > 0.0 {
            self.state.zoom_delta += self.zoom_step;
        } else if horizontal < 0.0 {
            self.state.zoom_delta -= self.zoom_step;
        }
        true
    }

    /// Apply a bound key action.
    pub fn on_key(&mut self, action: KeyAction) -> KeyResponse {
        match action {
            KeyAction::Quit => KeyResponse::Exit,
            KeyAction::Wireframe => KeyResponse::SetFillMode(FillMode::Wireframe),
            KeyAction::Solid => KeyResponse::SetFillMode(FillMode::Solid),
            KeyAction::ResetCamera => {
                self.reset();
                KeyResponse::Redraw
            }
            KeyAction::FullScreen => KeyResponse::SetFullscreen(true),
            KeyAction::Windowed => KeyResponse::SetFullscreen(false),
        }
    }

    /// Zero rotation, pan, and zoom. Drag flags are left alone.
    pub fn reset(&mut self) {
        self.state = CameraState::default();
    }

    /// `rotation_y(yaw) * rotation_x(pitch)` with the translation column
    /// replaced by `pan_offset + (0, 0, zoom_delta)`.
    #[must_use]
    pub fn compute_transform(&self) -> Mat4 {
        let s = &self.state;
        (Mat4::rotation_y(s.yaw_deg) * Mat4::rotation_x(s.pitch_deg))
            .with_translation(s.pan_offset + Vec3::new(0.0, 0.0, s.zoom_delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: ButtonSet = ButtonSet::only(MouseButton::Left);
    const RIGHT: ButtonSet = ButtonSet::only(MouseButton::Right);

    #[test]
    fn initial_state_is_zero() {
        let c = CameraController::new();
        assert_eq!(*c.state(), CameraState::default());
        assert!(!c.drag().rotating);
        assert!(!c.drag().panning);
        assert_eq!(c.compute_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn rotate_scenario() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Left, 100, 100);
        assert!(c.on_pointer_move(110, 115, LEFT));
        assert_eq!(c.state().yaw_deg, 5.0);
        assert_eq!(c.state().pitch_deg, 7.5);
        c.on_pointer_up(MouseButton::Left);
        assert!(!c.drag().rotating);
    }

    #[test]
    fn move_without_matching_button_is_ignored() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Left, 0, 0);
        assert!(!c.on_pointer_move(20, 20, RIGHT));
        assert!(!c.on_pointer_move(20, 20, ButtonSet::EMPTY));
        assert_eq!(c.state().yaw_deg, 0.0);
    }

    #[test]
    fn pan_inverts_vertical_axis() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Right, 10, 10);
        assert!(c.on_pointer_move(30, 40, RIGHT));
        assert!((c.state().pan_offset.x - 0.2).abs() < 1e-6);
        assert!((c.state().pan_offset.y + 0.3).abs() < 1e-6);
    }

    #[test]
    fn pan_origin_is_separate_from_rotate_origin() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Left, 0, 0);
        c.on_pointer_up(MouseButton::Left);
        c.on_pointer_down(MouseButton::Right, 50, 50);
        assert!(c.on_pointer_move(60, 50, RIGHT));
        assert!((c.state().pan_offset.x - 0.1).abs() < 1e-6);
        assert_eq!(c.drag().last_x, 0);
    }

    #[test]
    fn middle_button_is_a_no_op() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Middle, 5, 5);
        assert_eq!(*c.drag(), PointerDragState::default());
        c.on_pointer_up(MouseButton::Middle);
        assert_eq!(*c.drag(), PointerDragState::default());
    }

    #[test]
    fn scroll_steps_zoom() {
        let mut c = CameraController::new();
        assert!(c.on_scroll(1.0));
        assert!((c.state().zoom_delta - 0.1).abs() < 1e-6);
        assert!(c.on_scroll(2.5));
        assert!((c.state().zoom_delta - 0.2).abs() < 1e-6);
        assert!(c.on_scroll(-1.0));
        assert!((c.state().zoom_delta - 0.1).abs() < 1e-6);
        assert!(c.on_scroll(0.0));
        assert!((c.state().zoom_delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn reset_key_zeroes_state() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Left, 0, 0);
        let _ = c.on_pointer_move(40, -20, LEFT);
        let _ = c.on_scroll(1.0);
        assert_eq!(c.on_key(KeyAction::ResetCamera), KeyResponse::Redraw);
        assert_eq!(*c.state(), CameraState::default());
        // Still dragging after a reset.
        assert!(c.drag().rotating);
    }

    #[test]
    fn key_responses() {
        let mut c = CameraController::new();
        assert_eq!(c.on_key(KeyAction::Quit), KeyResponse::Exit);
        assert_eq!(
            c.on_key(KeyAction::Solid),
            KeyResponse::SetFillMode(FillMode::Solid)
        );
        assert_eq!(c.on_key(KeyAction::FullScreen), KeyResponse::SetFullscreen(true));
        assert_eq!(c.on_key(KeyAction::Windowed), KeyResponse::SetFullscreen(false));
    }

    #[test]
    fn transform_translation_includes_zoom() {
        let mut c = CameraController::new();
        c.on_pointer_down(MouseButton::Right, 0, 0);
        let _ = c.on_pointer_move(100, 0, RIGHT);
        let _ = c.on_scroll(1.0);
        let t = c.compute_transform().col(3);
        assert!((t.x - 1.0).abs() < 1e-6);
        assert!((t.z - 0.1).abs() < 1e-6);
        assert_eq!(t.w, 1.0);
    }

    #[test]
    fn custom_factors_apply() {
        let opts = CameraOptions {
            rotate_factor: 1.0,
            ..CameraOptions::default()
        };
        let mut c = CameraController::from_options(&opts);
        c.on_pointer_down(MouseButton::Left, 0, 0);
        let _ = c.on_pointer_move(3, 4, LEFT);
        assert_eq!(c.state().yaw_deg, 3.0);
        assert_eq!(c.state().pitch_deg, 4.0);
    }
}
