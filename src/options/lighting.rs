use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Single point light plus a Phong material. Defaults are a white light
/// over a gold material.
pub struct LightingOptions {
    /// Light position in world space (w = 0).
    pub light_position: [f32; 4],
    /// Light ambient term.
    pub light_ambient: [f32; 4],
    /// Light diffuse term.
    pub light_diffuse: [f32; 4],
    /// Light specular term.
    pub light_specular: [f32; 4],
    /// Material ambient reflectance.
    pub material_ambient: [f32; 4],
    /// Material diffuse reflectance.
    pub material_diffuse: [f32; 4],
    /// Material specular reflectance.
    pub material_specular: [f32; 4],
    /// Phong exponent.
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_position: [-2.0, 5.0, 2.0, 0.0],
            light_ambient: [0.0, 0.0, 0.0, 1.0],
            light_diffuse: [1.0, 1.0, 1.0, 1.0],
            light_specular: [0.8, 0.8, 0.8, 1.0],
            material_ambient: [0.274_725, 0.1995, 0.0745, 0.0],
            material_diffuse: [0.751_64, 0.606_48, 0.226_48, 0.0],
            material_specular: [0.628_281, 0.555_802, 0.366_606_5, 0.0],
            shininess: 51.2,
        }
    }
}
