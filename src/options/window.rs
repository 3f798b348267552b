use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window and surface parameters.
pub struct WindowOptions {
    /// Initial width in logical pixels.
    pub width: u32,
    /// Initial height in logical pixels.
    pub height: u32,
    /// MSAA sample count. Falls back to 1 when the adapter can't do it.
    pub sample_count: u32,
    /// Background colour, RGBA.
    pub clear_color: [f64; 4],
    /// Present with vsync (`Fifo`) rather than `AutoNoVsync`.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 720,
            sample_count: 4,
            clear_color: [0.4, 0.4, 0.4, 1.0],
            vsync: true,
        }
    }
}
