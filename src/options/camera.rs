use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Degrees of rotation per pixel of drag.
    pub rotate_factor: f32,
    /// World units of pan per pixel of drag.
    pub pan_increment: f32,
    /// World units of zoom per wheel notch.
    pub zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.05,
            zfar: 350.0,
            rotate_factor: 0.5,
            pan_increment: 0.01,
            zoom_step: 0.1,
        }
    }
}
