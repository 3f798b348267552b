use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML stays readable:
/// ```toml
/// [keybindings.bindings]
/// quit = "Escape"
/// reset_camera = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Leave the event loop.
    Quit,
    /// Rasterize triangles as outlines.
    Wireframe,
    /// Rasterize triangles filled.
    Solid,
    /// Zero rotation, pan, and zoom.
    ResetCamera,
    /// Borderless fullscreen.
    FullScreen,
    /// Back to a normal window.
    Windowed,
}
